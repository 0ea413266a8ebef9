//! Lead forms: draft values, their transitions and the submission session.

mod contact;
mod quote;
mod repair;
mod sell;
mod swap;

pub use contact::ContactDraft;
pub use quote::QuoteDraft;
pub use repair::RepairDraft;
pub use sell::{SellDraft, BATTERY_HEALTH_OPTIONS, CONDITIONS, DEVICE_TYPES, STORAGE_OPTIONS};
pub use swap::SwapDraft;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::LeadSink;
use crate::logging::LOG_FILE_TARGET;
use crate::Result;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// A lead form draft. Every field is a plain string; empty means unset.
pub trait LeadForm: Clone + Default + Serialize + Send + Sync {
    /// API path the draft is POSTed to
    const ENDPOINT: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const FAILURE_MESSAGE: &'static str;
    const VALIDATION_MESSAGE: &'static str = REQUIRED_FIELDS_MESSAGE;
    /// Whether "submit another" starts from an empty draft
    const CLEARS_ON_RESET: bool = false;
    /// WhatsApp message offered once the lead is stored
    const FOLLOW_UP_MESSAGE: Option<&'static str> = None;

    /// Sets `field` to `value`, rejecting names the form does not have
    fn apply(&mut self, field: &str, value: String) -> Result<()>;

    /// Required fields that are still empty
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Human readable summary sent through WhatsApp
    fn whatsapp_message(&self) -> String;

    fn from_fields<I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut draft = Self::default();
        for (field, value) in fields {
            draft.apply(&field, value)?;
        }
        Ok(draft)
    }
}

/// Names of the empty values among `fields`
pub(crate) fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(&'static str),
    Error(&'static str),
}

#[derive(Clone, Debug)]
pub struct FormSession<F> {
    draft: F,
    phase: Phase,
    notice: Option<Notice>,
}

impl<F: LeadForm> Default for FormSession<F> {
    fn default() -> Self {
        Self::editing(F::default())
    }
}

impl<F: LeadForm> FormSession<F> {
    pub fn editing(draft: F) -> Self {
        Self {
            draft,
            phase: Phase::Editing,
            notice: None,
        }
    }

    /// Session of a lead that was already stored
    pub fn submitted(draft: F) -> Self {
        Self {
            draft,
            phase: Phase::Submitted,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn draft(&self) -> &F {
        &self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn apply(&mut self, field: &str, value: String) -> Result<()> {
        self.draft.apply(field, value)
    }

    /// Validates the draft and moves to `Submitting`.
    ///
    /// Returns the payload to send, or `None` when nothing must be sent:
    /// a required field is empty, or the session is not `Editing`.
    pub fn begin_submit(&mut self) -> Option<Value> {
        if self.phase != Phase::Editing {
            return None;
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            info!("{} draft is missing {:?}", F::ENDPOINT, missing);
            self.notice = Some(Notice::Error(F::VALIDATION_MESSAGE));
            return None;
        }

        match serde_json::to_value(&self.draft) {
            Ok(payload) => {
                self.phase = Phase::Submitting;
                self.notice = None;
                Some(payload)
            }
            Err(e) => {
                error!("Failed to serialize {} draft: {}", F::ENDPOINT, e);
                self.notice = Some(Notice::Error(F::FAILURE_MESSAGE));
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<()>) {
        if self.phase != Phase::Submitting {
            return;
        }

        match outcome {
            Ok(()) => {
                info!(target: LOG_FILE_TARGET, "Lead submitted to {}", F::ENDPOINT);
                self.phase = Phase::Submitted;
                self.notice = Some(Notice::Success(F::SUCCESS_MESSAGE));
            }
            Err(e) => {
                warn!("Lead submission to {} failed: {}", F::ENDPOINT, e);
                self.phase = Phase::Editing;
                self.notice = Some(Notice::Error(F::FAILURE_MESSAGE));
            }
        }
    }

    /// Runs one submission against `sink` and returns the resulting phase
    pub async fn submit<S: LeadSink + ?Sized>(&mut self, sink: &S) -> Phase {
        if let Some(payload) = self.begin_submit() {
            let outcome = sink.submit_lead(F::ENDPOINT, payload).await;
            self.finish_submit(outcome);
        }
        self.phase
    }

    /// Leaves `Submitted` for a fresh `Editing` session
    pub fn submit_another(self) -> Self {
        if self.phase != Phase::Submitted {
            return self;
        }

        if F::CLEARS_ON_RESET {
            Self::default()
        } else {
            Self::editing(self.draft)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingSink;
    use super::*;
    use serde_json::json;

    fn filled_contact() -> ContactDraft {
        ContactDraft::from_fields(vec![
            ("name".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
            ("phone".to_string(), "08012345678".to_string()),
            ("message".to_string(), "Do you have a Pixel 8?".to_string()),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_contact_submission_posts_once() {
        let sink = RecordingSink::default();
        let mut session = FormSession::editing(filled_contact());

        let phase = session.submit(&sink).await;

        assert_eq!(phase, Phase::Submitted);
        assert_eq!(
            session.notice(),
            Some(Notice::Success("Message sent successfully!"))
        );
        let requests = sink.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "/contact");
        assert_eq!(
            requests[0].1,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "08012345678",
                "message": "Do you have a Pixel 8?"
            })
        );
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let sink = RecordingSink::default();

        let mut contact = FormSession::editing(ContactDraft::default());
        contact.apply("name", "Ada".to_string()).unwrap();
        assert_eq!(contact.submit(&sink).await, Phase::Editing);
        assert_eq!(
            contact.notice(),
            Some(Notice::Error("Please fill in all fields"))
        );

        let mut sell = FormSession::editing(SellDraft::default());
        sell.apply("device_type", "iPhone".to_string()).unwrap();
        sell.apply("model", "iPhone 13".to_string()).unwrap();
        assert_eq!(sell.submit(&sink).await, Phase::Editing);
        assert_eq!(
            sell.notice(),
            Some(Notice::Error("Please fill in all required fields"))
        );

        let mut swap = FormSession::<SwapDraft>::default();
        assert_eq!(swap.submit(&sink).await, Phase::Editing);
        let mut repair = FormSession::<RepairDraft>::default();
        assert_eq!(repair.submit(&sink).await, Phase::Editing);
        let mut quote = FormSession::<QuoteDraft>::default();
        assert_eq!(quote.submit(&sink).await, Phase::Editing);

        assert!(sink.requests().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut draft = filled_contact();
        draft.apply("message", " ".to_string()).unwrap();
        assert!(draft.missing_fields().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let sink = RecordingSink::failing(500);
        let mut session = FormSession::editing(filled_contact());

        assert_eq!(session.submit(&sink).await, Phase::Editing);
        assert_eq!(session.draft(), &filled_contact());
        assert_eq!(
            session.notice(),
            Some(Notice::Error("Failed to send message. Please try again."))
        );
        assert_eq!(sink.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_ignored() {
        let sink = RecordingSink::default();
        let mut session = FormSession::editing(filled_contact());

        assert!(session.begin_submit().is_some());
        assert_eq!(session.phase(), Phase::Submitting);
        assert_eq!(session.submit(&sink).await, Phase::Submitting);
        assert!(sink.requests().is_empty());

        session.finish_submit(Ok(()));
        assert_eq!(session.phase(), Phase::Submitted);
    }

    #[test]
    fn test_submit_another_resets_session() {
        let contact = FormSession::submitted(filled_contact()).submit_another();
        assert_eq!(contact.phase(), Phase::Editing);
        assert_eq!(contact.draft(), &ContactDraft::default());
        assert_eq!(contact.notice(), None);

        let mut sell_draft = SellDraft::default();
        sell_draft.apply("model", "Galaxy S23".to_string()).unwrap();
        let sell = FormSession::submitted(sell_draft.clone()).submit_another();
        assert_eq!(sell.phase(), Phase::Editing);
        assert_eq!(sell.draft(), &sell_draft);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut session = FormSession::<SwapDraft>::default();
        let result = session.apply("favourite_colour", "red".to_string());
        assert!(matches!(
            result,
            Err(crate::errors::StorefrontError::UnknownField(f)) if f == "favourite_colour"
        ));
    }
}
