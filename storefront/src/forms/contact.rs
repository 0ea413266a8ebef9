use serde::Serialize;

use super::{missing, LeadForm};
use crate::errors::StorefrontError;
use crate::whatsapp::CONTACT_MESSAGE;
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadForm for ContactDraft {
    const ENDPOINT: &'static str = "/contact";
    const SUCCESS_MESSAGE: &'static str = "Message sent successfully!";
    const FAILURE_MESSAGE: &'static str = "Failed to send message. Please try again.";
    const VALIDATION_MESSAGE: &'static str = "Please fill in all fields";
    const CLEARS_ON_RESET: bool = true;

    fn apply(&mut self, field: &str, value: String) -> Result<()> {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "message" => self.message = value,
            other => return Err(StorefrontError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("message", self.message.as_str()),
        ])
    }

    fn whatsapp_message(&self) -> String {
        CONTACT_MESSAGE.to_string()
    }
}
