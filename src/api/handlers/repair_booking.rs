use crate::{
    api::handlers::{is_authorized, rejected, storage_failed, unauthorized},
    db::{
        models::{ApiResponse, ErrorResponse, RepairBooking, RepairBookingParams},
        DbClient,
    },
    errors::ErrorMessages,
    logging::log_to_file,
    services::{notification::LeadKind, notify_admin},
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::to_value;
use tracing::{error, warn};

/// Handler for repair bookings
///
/// # Endpoint: POST /api/repair-booking
pub(crate) async fn submit_repair_booking(
    State(db): State<DbClient>,
    Json(payload): Json<RepairBookingParams>,
) -> (StatusCode, Json<ApiResponse>) {
    log_to_file("POST", "/api/repair-booking", to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        warn!("Rejected repair booking: {}", message);
        return rejected(message);
    }

    let record = RepairBooking::from(&payload);
    match db.insert_repair_booking(&record).await {
        Ok(stored) => {
            let summary = format!("{} - {}", stored.device_model, stored.issue);
            notify_admin(LeadKind::Repair, &stored.id, &summary);
            (StatusCode::OK, Json(stored.into()))
        }
        Err(e) => {
            error!("Error inserting repair booking: {:?}", e);
            storage_failed()
        }
    }
}

/// # Endpoint: GET /api/repair-bookings
///
/// # Security
/// Requires valid authorization header matching CONFIG.auth_secret
pub(crate) async fn get_repair_bookings(
    State(db): State<DbClient>,
    headers: HeaderMap,
) -> Result<Json<Vec<RepairBooking>>, (StatusCode, Json<ErrorResponse>)> {
    if !is_authorized(&headers) {
        warn!(target: "save_to_log_file", "Unauthorized repair booking listing attempt");
        return Err(unauthorized());
    }

    db.get_repair_bookings().await.map(Json).map_err(|err| {
        error!("Failed to list repair bookings: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(ErrorMessages::DB.to_string())),
        )
    })
}
