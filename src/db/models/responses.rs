use serde::{Deserialize, Serialize};

use super::{ContactMessage, PriceQuote, RepairBooking, SellRequest, SwapRequest};

/// General API response status
/// Used to indicate success or failure of operations
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Operation completed successfully
    Success,
    /// Operation encountered an error
    Error,
}

/// Standard error response structure
/// Used when an operation fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status will always be Error for this type
    pub status: Status,
    /// Detailed error message explaining what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: error.into(),
        }
    }
}

/// The stored lead, echoed back to the caller
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadResponse {
    Contact(ContactMessage),
    Sell(SellRequest),
    Swap(SwapRequest),
    Repair(RepairBooking),
    Quote(PriceQuote),
}

/// Main API response enum for lead submissions
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(LeadResponse),
    Error(ErrorResponse),
}

impl From<ContactMessage> for ApiResponse {
    fn from(value: ContactMessage) -> Self {
        Self::Success(LeadResponse::Contact(value))
    }
}

impl From<SellRequest> for ApiResponse {
    fn from(value: SellRequest) -> Self {
        Self::Success(LeadResponse::Sell(value))
    }
}

impl From<SwapRequest> for ApiResponse {
    fn from(value: SwapRequest) -> Self {
        Self::Success(LeadResponse::Swap(value))
    }
}

impl From<RepairBooking> for ApiResponse {
    fn from(value: RepairBooking) -> Self {
        Self::Success(LeadResponse::Repair(value))
    }
}

impl From<PriceQuote> for ApiResponse {
    fn from(value: PriceQuote) -> Self {
        Self::Success(LeadResponse::Quote(value))
    }
}

impl From<ErrorResponse> for ApiResponse {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ApiResponse::from(ErrorResponse::new("phone is required")))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "error": "phone is required"})
        );
    }
}
