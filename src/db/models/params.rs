use crate::validation::{validate_optional_email, validate_required};
use serde::{Deserialize, Serialize};

/// Normalizes an optional form value, treating an empty string as absent
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Payload of POST /contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessageParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessageParams {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("phone", &self.phone)?;
        validate_required("message", &self.message)?;
        validate_optional_email(Some(&self.email))
    }
}

/// Payload of POST /sell-request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellRequestParams {
    pub device_type: String,
    pub model: String,
    #[serde(default)]
    pub storage: Option<String>,
    pub condition: String,
    #[serde(default)]
    pub battery_health: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl SellRequestParams {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("device_type", &self.device_type)?;
        validate_required("model", &self.model)?;
        validate_required("condition", &self.condition)?;
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_optional_email(self.email.as_deref())
    }
}

/// Payload of POST /swap-request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapRequestParams {
    pub current_device_type: String,
    pub current_model: String,
    pub current_condition: String,
    pub desired_device: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl SwapRequestParams {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("current_device_type", &self.current_device_type)?;
        validate_required("current_model", &self.current_model)?;
        validate_required("current_condition", &self.current_condition)?;
        validate_required("desired_device", &self.desired_device)?;
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_optional_email(self.email.as_deref())
    }
}

/// Payload of POST /repair-booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepairBookingParams {
    pub device_type: String,
    pub device_model: String,
    pub issue: String,
    #[serde(default)]
    pub issue_description: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl RepairBookingParams {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("device_type", &self.device_type)?;
        validate_required("device_model", &self.device_model)?;
        validate_required("issue", &self.issue)?;
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_optional_email(self.email.as_deref())
    }
}

/// Payload of POST /price-quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuoteParams {
    pub product_name: String,
    pub product_category: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PriceQuoteParams {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("product_name", &self.product_name)?;
        validate_required("product_category", &self.product_category)?;
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_optional_email(self.email.as_deref())
    }
}

/// Query string of GET /products
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct ProductsQuery {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_requires_every_field() {
        let params: ContactMessageParams = serde_json::from_str(
            r#"{"name":"Grace","email":"grace@example.com","phone":"0803","message":""}"#,
        )
        .unwrap();
        assert_eq!(params.validate(), Err("message is required".to_string()));
    }

    #[test]
    fn test_contact_rejects_malformed_email() {
        let params = ContactMessageParams {
            name: "Grace".to_string(),
            email: "grace".to_string(),
            phone: "0803".to_string(),
            message: "Hello".to_string(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_sell_request_optional_fields_may_be_absent() {
        let params: SellRequestParams = serde_json::from_str(
            r#"{"device_type":"iPhone","model":"iPhone 12","condition":"Fair - Visible Wear","name":"Chidi","phone":"0803"}"#,
        )
        .unwrap();
        assert_eq!(params.storage, None);
        assert_eq!(params.battery_health, None);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_swap_request_requires_desired_device() {
        let params = SwapRequestParams {
            current_device_type: "Samsung".to_string(),
            current_model: "S21".to_string(),
            current_condition: "Excellent - Like New".to_string(),
            desired_device: String::new(),
            name: "Amina".to_string(),
            email: None,
            phone: "0803".to_string(),
            additional_info: None,
        };
        assert_eq!(
            params.validate(),
            Err("desired_device is required".to_string())
        );
    }

    #[test]
    fn test_repair_booking_accepts_missing_email() {
        let params: RepairBookingParams = serde_json::from_str(
            r#"{"device_type":"iPhone","device_model":"13 Pro","issue":"Battery Replacement","name":"Emeka","phone":"0803","email":""}"#,
        )
        .unwrap();
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_price_quote_requires_product() {
        let params = PriceQuoteParams {
            product_name: String::new(),
            product_category: "Laptops".to_string(),
            name: "Fatima".to_string(),
            phone: "0803".to_string(),
            email: None,
            message: None,
        };
        assert_eq!(
            params.validate(),
            Err("product_name is required".to_string())
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x".to_string()));
    }
}
