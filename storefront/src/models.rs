//! Catalog types as served by the Gadget Haven API.

use serde::{Deserialize, Serialize};

/// Category value meaning "no filter"
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub storage: String,
    pub condition: String,
    /// Display price, e.g. "₦850,000"
    pub price: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_from: String,
    pub icon: RepairIcon,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: u8,
    pub device: String,
}

/// Icon tag of a repair service. Unknown tags fail deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairIcon {
    Screen,
    Battery,
    Charging,
    Water,
    Software,
    Glass,
}

impl RepairIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            RepairIcon::Screen => "🖥️",
            RepairIcon::Battery => "🔋",
            RepairIcon::Charging => "⚡",
            RepairIcon::Water => "💧",
            RepairIcon::Software => "⚙️",
            RepairIcon::Glass => "📱",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RepairIcon::Screen => "icon-monitor",
            RepairIcon::Battery => "icon-battery",
            RepairIcon::Charging => "icon-zap",
            RepairIcon::Water => "icon-droplets",
            RepairIcon::Software => "icon-settings",
            RepairIcon::Glass => "icon-smartphone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_icon_tags() {
        let service: RepairService = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Screen Replacement",
            "description": "Cracked or damaged screen? We'll fix it fast.",
            "price_from": "₦25,000",
            "icon": "screen"
        }))
        .unwrap();
        assert_eq!(service.icon, RepairIcon::Screen);
        assert_eq!(service.icon.css_class(), "icon-monitor");
    }

    #[test]
    fn test_unknown_repair_icon_is_rejected() {
        let result = serde_json::from_str::<RepairIcon>("\"keyboard\"");
        assert!(result.is_err());
    }
}
