use serde::Serialize;

use super::{missing, LeadForm};
use crate::errors::StorefrontError;
use crate::Result;

pub const DEVICE_TYPES: &[&str] = &[
    "iPhone",
    "Samsung",
    "Pixel",
    "OnePlus",
    "Xiaomi",
    "Other Android",
    "MacBook",
    "Laptop",
    "iPad/Tablet",
    "Apple Watch",
    "Other",
];

pub const CONDITIONS: &[&str] = &[
    "Excellent - Like New",
    "Good - Minor Scratches",
    "Fair - Visible Wear",
    "Damaged - Cracked/Broken",
];

pub const STORAGE_OPTIONS: &[&str] = &["32GB", "64GB", "128GB", "256GB", "512GB", "1TB", "Other"];

pub const BATTERY_HEALTH_OPTIONS: &[&str] = &["95-100%", "85-94%", "75-84%", "Below 75%", "Unknown"];

/// Trade-in request for a customer's device
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SellDraft {
    pub device_type: String,
    pub model: String,
    pub storage: String,
    pub condition: String,
    pub battery_health: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub additional_info: String,
}

impl LeadForm for SellDraft {
    const ENDPOINT: &'static str = "/sell-request";
    const SUCCESS_MESSAGE: &'static str = "Your sell request has been submitted!";
    const FAILURE_MESSAGE: &'static str = "Failed to submit request. Please try again.";
    const FOLLOW_UP_MESSAGE: Option<&'static str> =
        Some("Hi, I just submitted a sell request and would like to follow up.");

    fn apply(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "device_type" => &mut self.device_type,
            "model" => &mut self.model,
            "storage" => &mut self.storage,
            "condition" => &mut self.condition,
            "battery_health" => &mut self.battery_health,
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
            ("device_type", self.device_type.as_str()),
            ("model", self.model.as_str()),
            ("condition", self.condition.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
        ])
    }

    fn whatsapp_message(&self) -> String {
        let battery_health = if self.battery_health.is_empty() {
            "Not specified"
        } else {
            self.battery_health.as_str()
        };

        format!(
            "Hi Gadget Haven, I want to sell my device:\n\n\
             Device: {} {}\n\
             Storage: {}\n\
             Condition: {}\n\
             Battery Health: {}\n\n\
             Please provide a quote.",
            self.device_type, self.model, self.storage, self.condition, battery_health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_message_falls_back_for_battery_health() {
        let draft = SellDraft {
            device_type: "iPhone".to_string(),
            model: "iPhone 13 Pro".to_string(),
            storage: "256GB".to_string(),
            condition: "Good - Minor Scratches".to_string(),
            ..Default::default()
        };

        assert_eq!(
            draft.whatsapp_message(),
            "Hi Gadget Haven, I want to sell my device:\n\nDevice: iPhone iPhone 13 Pro\nStorage: 256GB\nCondition: Good - Minor Scratches\nBattery Health: Not specified\n\nPlease provide a quote."
        );
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let draft = SellDraft::from_fields(vec![
            ("device_type".to_string(), "Samsung".to_string()),
            ("model".to_string(), "Galaxy S21".to_string()),
            ("condition".to_string(), "Fair - Visible Wear".to_string()),
            ("name".to_string(), "Tunde".to_string()),
            ("phone".to_string(), "08011111111".to_string()),
        ])
        .unwrap();
        assert!(draft.missing_fields().is_empty());
    }
}
