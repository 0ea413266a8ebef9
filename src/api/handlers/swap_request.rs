use crate::{
    api::handlers::{is_authorized, rejected, storage_failed, unauthorized},
    db::{
        models::{ApiResponse, ErrorResponse, SwapRequest, SwapRequestParams},
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

/// Handler for the swap form
///
/// # Endpoint: POST /api/swap-request
pub(crate) async fn submit_swap_request(
    State(db): State<DbClient>,
    Json(payload): Json<SwapRequestParams>,
) -> (StatusCode, Json<ApiResponse>) {
    log_to_file("POST", "/api/swap-request", to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        warn!("Rejected swap request: {}", message);
        return rejected(message);
    }

    let record = SwapRequest::from(&payload);
    match db.insert_swap_request(&record).await {
        Ok(stored) => {
            let summary = format!("{} for {}", stored.current_model, stored.desired_device);
            notify_admin(LeadKind::Swap, &stored.id, &summary);
            (StatusCode::OK, Json(stored.into()))
        }
        Err(e) => {
            error!("Error inserting swap request: {:?}", e);
            storage_failed()
        }
    }
}

/// # Endpoint: GET /api/swap-requests
///
/// # Security
/// Requires valid authorization header matching CONFIG.auth_secret
pub(crate) async fn get_swap_requests(
    State(db): State<DbClient>,
    headers: HeaderMap,
) -> Result<Json<Vec<SwapRequest>>, (StatusCode, Json<ErrorResponse>)> {
    if !is_authorized(&headers) {
        warn!(target: "save_to_log_file", "Unauthorized swap request listing attempt");
        return Err(unauthorized());
    }

    db.get_swap_requests().await.map(Json).map_err(|err| {
        error!("Failed to list swap requests: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(ErrorMessages::DB.to_string())),
        )
    })
}
