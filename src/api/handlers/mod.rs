//! API request handlers for the Gadget Haven service.
//! Each module corresponds to a specific API endpoint or related group of endpoints.

// Read-only catalog
pub mod catalog;

// Lead capture
pub mod contact;
pub mod price_quote;
pub mod repair_booking;
pub mod sell_request;
pub mod swap_request;

pub mod health;

pub(crate) use catalog::{
    get_categories, get_product, get_products, get_repair_services, get_testimonials,
};
pub(crate) use contact::submit_contact_form;
pub(crate) use health::health_check;
pub(crate) use price_quote::submit_price_quote;
pub(crate) use repair_booking::{get_repair_bookings, submit_repair_booking};
pub(crate) use sell_request::{get_sell_requests, submit_sell_request};
pub(crate) use swap_request::{get_swap_requests, submit_swap_request};

use crate::{
    db::models::{ApiResponse, ErrorResponse},
    errors::ErrorMessages,
    CONFIG,
};
use axum::{
    http::{HeaderMap, StatusCode},
    Json,
};

/// Validates the authorization header against the configured secret
pub fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("AUTHORIZATION")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|header_value| header_value == CONFIG.auth_secret)
}

/// Response for a lead that failed validation
pub(crate) fn rejected(message: String) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new(message).into()),
    )
}

/// Response for a lead that could not be stored
pub(crate) fn storage_failed() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(ErrorMessages::DB.to_string()).into()),
    )
}

/// Response for a listing requested without the admin secret
pub(crate) fn unauthorized() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(ErrorMessages::Unauthorized.to_string())),
    )
}
