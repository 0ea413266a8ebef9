use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unexpected Error: {0}")]
    Custom(String),

    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    #[error(transparent)]
    RedisError(#[from] redis::RedisError),

    #[error(transparent)]
    DbPool(#[from] diesel_async::pooled_connection::deadpool::PoolError),

    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Error messages for the API Responses
pub enum ErrorMessages {
    Unexpected,
    DB,
    ProductNotFound,
    Unauthorized,
}

// Use the ErrorMessages enum to display error messages for the API Responses
impl fmt::Display for ErrorMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorMessages::Unexpected => "We encountered an unexpected error while processing your request.",
            ErrorMessages::DB => "An unforeseen database error has occurred and your request was not saved. Kindly try again after some time.",
            ErrorMessages::ProductNotFound => "Product not found",
            ErrorMessages::Unauthorized => "Missing or invalid authorization header",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_convert_transparently() {
        let err = ApiError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, ApiError::Diesel(_)));
        assert_eq!(err.to_string(), diesel::result::Error::NotFound.to_string());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ErrorMessages::ProductNotFound.to_string(), "Product not found");
        assert_eq!(
            ErrorMessages::Unauthorized.to_string(),
            "Missing or invalid authorization header"
        );
    }
}
