use serde::Serialize;

use super::{missing, LeadForm};
use crate::errors::StorefrontError;
use crate::models::Product;
use crate::whatsapp::product_quote_message;
use crate::Result;

/// Price quote for one shop product. Product fields come from the catalog,
/// only the contact fields are user input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuoteDraft {
    pub product_name: String,
    pub product_category: String,
    #[serde(skip)]
    pub product_storage: String,
    #[serde(skip)]
    pub product_condition: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl QuoteDraft {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_name: product.name.clone(),
            product_category: product.category.clone(),
            product_storage: product.storage.clone(),
            product_condition: product.condition.clone(),
            ..Default::default()
        }
    }
}

impl LeadForm for QuoteDraft {
    const ENDPOINT: &'static str = "/price-quote";
    const SUCCESS_MESSAGE: &'static str = "Quote request submitted! We'll contact you shortly.";
    const FAILURE_MESSAGE: &'static str = "Failed to submit request. Please try again.";
    const CLEARS_ON_RESET: bool = true;

    fn apply(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "message" => &mut self.message,
            other => return Err(StorefrontError::UnknownField(other.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("product_name", self.product_name.as_str()),
            ("product_category", self.product_category.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
        ])
    }

    fn whatsapp_message(&self) -> String {
        product_quote_message(
            &self.product_name,
            &self.product_storage,
            &self.product_condition,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        Product {
            id: "5".to_string(),
            name: "MacBook Air M2".to_string(),
            category: "Laptops".to_string(),
            storage: "256GB".to_string(),
            condition: "Brand New".to_string(),
            price: "₦1,150,000".to_string(),
            image: "https://example.com/mba.jpg".to_string(),
        }
    }

    #[test]
    fn test_product_fields_are_not_user_input() {
        let mut draft = QuoteDraft::for_product(&product());
        assert!(draft.apply("product_name", "Free laptop".to_string()).is_err());
        assert_eq!(draft.product_name, "MacBook Air M2");
    }

    #[test]
    fn test_payload_omits_display_only_fields() {
        let mut draft = QuoteDraft::for_product(&product());
        draft.apply("name", "Ngozi".to_string()).unwrap();
        draft.apply("phone", "0803".to_string()).unwrap();

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "product_name": "MacBook Air M2",
                "product_category": "Laptops",
                "name": "Ngozi",
                "phone": "0803",
                "email": "",
                "message": ""
            })
        );
        assert_eq!(
            draft.whatsapp_message(),
            "Hi Gadget Haven, I'm interested in the MacBook Air M2 (256GB - Brand New). Please share the latest price and availability."
        );
    }
}
