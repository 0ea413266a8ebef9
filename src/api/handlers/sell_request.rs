use crate::{
    api::handlers::{is_authorized, rejected, storage_failed, unauthorized},
    db::{
        models::{ApiResponse, ErrorResponse, SellRequest, SellRequestParams},
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

/// Handler for the sell / trade-in form
///
/// # Endpoint: POST /api/sell-request
pub(crate) async fn submit_sell_request(
    State(db): State<DbClient>,
    Json(payload): Json<SellRequestParams>,
) -> (StatusCode, Json<ApiResponse>) {
    log_to_file("POST", "/api/sell-request", to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        warn!("Rejected sell request: {}", message);
        return rejected(message);
    }

    let record = SellRequest::from(&payload);
    match db.insert_sell_request(&record).await {
        Ok(stored) => {
            let summary = format!("{} from {}", stored.model, stored.phone);
            notify_admin(LeadKind::Sell, &stored.id, &summary);
            (StatusCode::OK, Json(stored.into()))
        }
        Err(e) => {
            error!("Error inserting sell request: {:?}", e);
            storage_failed()
        }
    }
}

/// Handler for listing stored sell requests
///
/// # Endpoint: GET /api/sell-requests
///
/// # Security
/// Requires valid authorization header matching CONFIG.auth_secret
pub(crate) async fn get_sell_requests(
    State(db): State<DbClient>,
    headers: HeaderMap,
) -> Result<Json<Vec<SellRequest>>, (StatusCode, Json<ErrorResponse>)> {
    if !is_authorized(&headers) {
        warn!(target: "save_to_log_file", "Unauthorized sell request listing attempt");
        return Err(unauthorized());
    }

    db.get_sell_requests().await.map(Json).map_err(|err| {
        error!("Failed to list sell requests: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(ErrorMessages::DB.to_string())),
        )
    })
}
