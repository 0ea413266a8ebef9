use serde::Serialize;

use super::{missing, LeadForm};
use crate::errors::StorefrontError;
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RepairDraft {
    pub device_type: String,
    pub device_model: String,
    /// Prefilled with the selected repair service name
    pub issue: String,
    pub issue_description: String,
    pub preferred_date: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl LeadForm for RepairDraft {
    const ENDPOINT: &'static str = "/repair-booking";
    const SUCCESS_MESSAGE: &'static str = "Your repair booking has been submitted!";
    const FAILURE_MESSAGE: &'static str = "Failed to submit booking. Please try again.";
    const FOLLOW_UP_MESSAGE: Option<&'static str> =
        Some("Hi, I just booked a repair and would like to confirm.");

    fn apply(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "device_type" => &mut self.device_type,
            "device_model" => &mut self.device_model,
            "issue" => &mut self.issue,
            "issue_description" => &mut self.issue_description,
            "preferred_date" => &mut self.preferred_date,
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            other => return Err(StorefrontError::UnknownField(other.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("device_type", self.device_type.as_str()),
            ("device_model", self.device_model.as_str()),
            ("issue", self.issue.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
        ])
    }

    fn whatsapp_message(&self) -> String {
        let details = if self.issue_description.is_empty() {
            "N/A"
        } else {
            self.issue_description.as_str()
        };

        format!(
            "Hi Gadget Haven, I need a repair:\n\n\
             Device: {} {}\n\
             Issue: {}\n\
             Details: {}\n\n\
             Please advise on pricing and availability.",
            self.device_type, self.device_model, self.issue, details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_message() {
        let mut draft = RepairDraft::default();
        draft.apply("device_type", "iPhone".to_string()).unwrap();
        draft.apply("device_model", "iPhone 14".to_string()).unwrap();
        draft.apply("issue", "Battery Replacement".to_string()).unwrap();

        assert_eq!(
            draft.whatsapp_message(),
            "Hi Gadget Haven, I need a repair:\n\nDevice: iPhone iPhone 14\nIssue: Battery Replacement\nDetails: N/A\n\nPlease advise on pricing and availability."
        );

        draft
            .apply("issue_description", "Drains by noon".to_string())
            .unwrap();
        assert!(draft.whatsapp_message().contains("Details: Drains by noon\n"));
    }
}
