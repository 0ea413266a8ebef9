//! wa.me deep links.

use url::Url;

use crate::errors::StorefrontError;
use crate::Result;

/// Message used by the header, footer and floating WhatsApp buttons
pub const PRICE_QUOTE_MESSAGE: &str = "Hi Gadget Haven, I'd like to get a price quote please";

pub const CONTACT_MESSAGE: &str = "Hi Gadget Haven, I'd like to get in touch.";

pub fn product_quote_message(name: &str, storage: &str, condition: &str) -> String {
    format!(
        "Hi Gadget Haven, I'm interested in the {} ({} - {}). Please share the latest price and availability.",
        name, storage, condition
    )
}

#[derive(Clone, Debug)]
pub struct WhatsApp {
    base: Url,
}

impl WhatsApp {
    /// `number` is the international number without `+`, e.g. 2349076087744
    pub fn new(number: &str) -> Result<Self> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::Config(format!(
                "WhatsApp number must be digits only, got {:?}",
                number
            )));
        }

        Ok(Self {
            base: Url::parse(&format!("https://wa.me/{}", number))?,
        })
    }

    /// Deep link opening a chat prefilled with `message`
    pub fn link(&self, message: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("text", message);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn test_link_targets_configured_number() {
        let whatsapp = WhatsApp::new("2349076087744").unwrap();
        let url = whatsapp.link(CONTACT_MESSAGE);

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/2349076087744");
        assert_eq!(decoded_text(&url), CONTACT_MESSAGE);
    }

    #[test]
    fn test_link_encodes_reserved_characters() {
        let whatsapp = WhatsApp::new("2349076087744").unwrap();
        let message = "Device: iPhone 13 & case\nCondition: 100% ok?";
        let url = whatsapp.link(message);

        assert!(!url.as_str().contains('\n'));
        assert!(!url.as_str().contains(" & "));
        assert_eq!(decoded_text(&url), message);
    }

    #[test]
    fn test_invalid_number_is_a_config_error() {
        assert!(matches!(
            WhatsApp::new("+234 907"),
            Err(StorefrontError::Config(_))
        ));
        assert!(WhatsApp::new("").is_err());
    }

    #[test]
    fn test_product_quote_message() {
        assert_eq!(
            product_quote_message("iPhone 15 Pro Max", "256GB", "Brand New"),
            "Hi Gadget Haven, I'm interested in the iPhone 15 Pro Max (256GB - Brand New). Please share the latest price and availability."
        );
    }
}
