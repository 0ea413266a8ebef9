use serde::Serialize;

use super::{missing, LeadForm};
use crate::errors::StorefrontError;
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SwapDraft {
    pub current_device_type: String,
    pub current_model: String,
    pub current_condition: String,
    pub desired_device: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub additional_info: String,
}

impl LeadForm for SwapDraft {
    const ENDPOINT: &'static str = "/swap-request";
    const SUCCESS_MESSAGE: &'static str = "Your swap request has been submitted!";
    const FAILURE_MESSAGE: &'static str = "Failed to submit request. Please try again.";
    const FOLLOW_UP_MESSAGE: Option<&'static str> =
        Some("Hi, I just submitted a swap request and would like to follow up.");

    fn apply(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "current_device_type" => &mut self.current_device_type,
            "current_model" => &mut self.current_model,
            "current_condition" => &mut self.current_condition,
            "desired_device" => &mut self.desired_device,
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "additional_info" => &mut self.additional_info,
            other => return Err(StorefrontError::UnknownField(other.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("current_device_type", self.current_device_type.as_str()),
            ("current_model", self.current_model.as_str()),
            ("current_condition", self.current_condition.as_str()),
            ("desired_device", self.desired_device.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
        ])
    }

    fn whatsapp_message(&self) -> String {
        format!(
            "Hi Gadget Haven, I want to swap my device:\n\n\
             Current Device: {} {}\n\
             Condition: {}\n\
             Desired Device: {}\n\n\
             Please let me know the swap options.",
            self.current_device_type, self.current_model, self.current_condition, self.desired_device
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whatsapp::WhatsApp;

    #[test]
    fn test_whatsapp_link_carries_draft_values() {
        let draft = SwapDraft {
            current_device_type: "iPhone".to_string(),
            current_model: "iPhone 12 & case".to_string(),
            current_condition: "Excellent - Like New".to_string(),
            desired_device: "iPhone 15 Pro Max 256GB".to_string(),
            ..Default::default()
        };

        let url = WhatsApp::new("2349076087744")
            .unwrap()
            .link(&draft.whatsapp_message());
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();

        assert!(text.contains("Current Device: iPhone iPhone 12 & case"));
        assert!(text.contains("Condition: Excellent - Like New"));
        assert!(text.contains("Desired Device: iPhone 15 Pro Max 256GB"));
    }
}
