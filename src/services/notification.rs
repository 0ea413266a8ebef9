use crate::{logging::LOG_FILE_TARGET, CONFIG};
use std::fmt;
use tracing::info;

/// The kinds of lead the shop receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Contact,
    Sell,
    Swap,
    Repair,
    PriceQuote,
}

impl fmt::Display for LeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeadKind::Contact => "Contact form",
            LeadKind::Sell => "Sell request",
            LeadKind::Swap => "Swap request",
            LeadKind::Repair => "Repair booking",
            LeadKind::PriceQuote => "Price quote",
        };
        write!(f, "{label}")
    }
}

/// Reports a stored lead to the configured admin recipient as a structured
/// line on the rolling request log.
pub fn notify_admin(kind: LeadKind, lead_id: &str, summary: &str) {
    info!(
        target: LOG_FILE_TARGET,
        lead_id = lead_id,
        recipient = %CONFIG.admin_email,
        "{} submitted: {} - would send to: {}",
        kind,
        summary,
        CONFIG.admin_email
    );
}
