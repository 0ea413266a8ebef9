use crate::{
    api::handlers::{rejected, storage_failed},
    db::{
        models::{ApiResponse, ContactMessage, ContactMessageParams},
        DbClient,
    },
    logging::log_to_file,
    services::{notification::LeadKind, notify_admin},
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::to_value;
use tracing::{error, warn};

/// Handler for the contact form
///
/// # Endpoint: POST /api/contact
///
/// # Returns
/// * `200` with the stored message
/// * `422` when a field is empty or the e-mail is malformed
/// * `500` when the message could not be stored
pub(crate) async fn submit_contact_form(
    State(db): State<DbClient>,
    Json(payload): Json<ContactMessageParams>,
) -> (StatusCode, Json<ApiResponse>) {
    log_to_file("POST", "/api/contact", to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        warn!("Rejected contact form: {}", message);
        return rejected(message);
    }

    let record = ContactMessage::from(&payload);
    match db.insert_contact_message(&record).await {
        Ok(stored) => {
            notify_admin(LeadKind::Contact, &stored.id, &stored.email);
            (StatusCode::OK, Json(stored.into()))
        }
        Err(e) => {
            error!("Error inserting contact message: {:?}", e);
            storage_failed()
        }
    }
}
