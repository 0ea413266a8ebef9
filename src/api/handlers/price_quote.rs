use crate::{
    api::handlers::{rejected, storage_failed},
    db::{
        models::{ApiResponse, PriceQuote, PriceQuoteParams},
        DbClient,
    },
    logging::log_to_file,
    services::{notification::LeadKind, notify_admin},
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::to_value;
use tracing::{error, warn};

/// Handler for price quote requests raised from the shop page
///
/// # Endpoint: POST /api/price-quote
pub(crate) async fn submit_price_quote(
    State(db): State<DbClient>,
    Json(payload): Json<PriceQuoteParams>,
) -> (StatusCode, Json<ApiResponse>) {
    log_to_file("POST", "/api/price-quote", to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        warn!("Rejected price quote: {}", message);
        return rejected(message);
    }

    let record = PriceQuote::from(&payload);
    match db.insert_price_quote(&record).await {
        Ok(stored) => {
            notify_admin(LeadKind::PriceQuote, &stored.id, &stored.product_name);
            (StatusCode::OK, Json(stored.into()))
        }
        Err(e) => {
            error!("Error inserting price quote: {:?}", e);
            storage_failed()
        }
    }
}
