use crate::schema::{
    contact_messages, price_quotes, products, repair_bookings, repair_services, sell_requests,
    swap_requests, testimonials,
};
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    non_empty, ContactMessageParams, PriceQuoteParams, RepairBookingParams, SellRequestParams,
    SwapRequestParams,
};

/// Status every sell, swap and repair lead starts in
pub const PENDING_STATUS: &str = "pending";

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Clone, Debug, Serialize, Deserialize, Insertable, Queryable, Identifiable)]
#[diesel(table_name = contact_messages, primary_key(id))]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl<'a> From<&'a ContactMessageParams> for ContactMessage {
    fn from(params: &'a ContactMessageParams) -> Self {
        ContactMessage {
            id: new_id(),
            name: params.name.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            message: params.message.clone(),
            created_at: now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Insertable, Queryable, Identifiable)]
#[diesel(table_name = sell_requests, primary_key(id))]
pub struct SellRequest {
    pub id: String,
    pub device_type: String,
    pub model: String,
    pub storage: Option<String>,
    pub condition: String,
    pub battery_health: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub additional_info: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl<'a> From<&'a SellRequestParams> for SellRequest {
    fn from(params: &'a SellRequestParams) -> Self {
        SellRequest {
            id: new_id(),
            device_type: params.device_type.clone(),
            model: params.model.clone(),
            storage: non_empty(&params.storage),
            condition: params.condition.clone(),
            battery_health: non_empty(&params.battery_health),
            name: params.name.clone(),
            email: non_empty(&params.email),
            phone: params.phone.clone(),
            additional_info: non_empty(&params.additional_info),
            status: PENDING_STATUS.to_string(),
            created_at: now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Insertable, Queryable, Identifiable)]
#[diesel(table_name = swap_requests, primary_key(id))]
pub struct SwapRequest {
    pub id: String,
    pub current_device_type: String,
    pub current_model: String,
    pub current_condition: String,
    pub desired_device: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub additional_info: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl<'a> From<&'a SwapRequestParams> for SwapRequest {
    fn from(params: &'a SwapRequestParams) -> Self {
        SwapRequest {
            id: new_id(),
            current_device_type: params.current_device_type.clone(),
            current_model: params.current_model.clone(),
            current_condition: params.current_condition.clone(),
            desired_device: params.desired_device.clone(),
            name: params.name.clone(),
            email: non_empty(&params.email),
            phone: params.phone.clone(),
            additional_info: non_empty(&params.additional_info),
            status: PENDING_STATUS.to_string(),
            created_at: now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Insertable, Queryable, Identifiable)]
#[diesel(table_name = repair_bookings, primary_key(id))]
pub struct RepairBooking {
    pub id: String,
    pub device_type: String,
    pub device_model: String,
    pub issue: String,
    pub issue_description: Option<String>,
    pub preferred_date: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl<'a> From<&'a RepairBookingParams> for RepairBooking {
    fn from(params: &'a RepairBookingParams) -> Self {
        RepairBooking {
            id: new_id(),
            device_type: params.device_type.clone(),
            device_model: params.device_model.clone(),
            issue: params.issue.clone(),
            issue_description: non_empty(&params.issue_description),
            preferred_date: non_empty(&params.preferred_date),
            name: params.name.clone(),
            phone: params.phone.clone(),
            email: non_empty(&params.email),
            status: PENDING_STATUS.to_string(),
            created_at: now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Insertable, Queryable, Identifiable)]
#[diesel(table_name = price_quotes, primary_key(id))]
pub struct PriceQuote {
    pub id: String,
    pub product_name: String,
    pub product_category: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

impl<'a> From<&'a PriceQuoteParams> for PriceQuote {
    fn from(params: &'a PriceQuoteParams) -> Self {
        PriceQuote {
            id: new_id(),
            product_name: params.product_name.clone(),
            product_category: params.product_category.clone(),
            name: params.name.clone(),
            phone: params.phone.clone(),
            email: non_empty(&params.email),
            message: non_empty(&params.message),
            created_at: now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub storage: String,
    pub condition: String,
    pub price: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = repair_services)]
pub struct RepairService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_from: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = testimonials)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: i32,
    pub device: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_request_from_params() {
        let params = SellRequestParams {
            device_type: "iPhone".to_string(),
            model: "iPhone 12".to_string(),
            storage: Some(String::new()),
            condition: "Good - Minor Scratches".to_string(),
            battery_health: Some(String::new()),
            name: "Chidi".to_string(),
            email: Some(String::new()),
            phone: "08012345678".to_string(),
            additional_info: Some("Box included".to_string()),
        };
        let record = SellRequest::from(&params);

        assert_eq!(record.status, PENDING_STATUS);
        assert_eq!(record.battery_health, None);
        assert_eq!(record.storage, None);
        assert_eq!(record.email, None);
        assert_eq!(record.additional_info.as_deref(), Some("Box included"));
        assert!(uuid::Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_lead_ids_are_unique() {
        let params = ContactMessageParams {
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            phone: "08012345678".to_string(),
            message: "Do you have the S24 in stock?".to_string(),
        };
        let first = ContactMessage::from(&params);
        let second = ContactMessage::from(&params);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_swap_request_drops_empty_email() {
        let params = SwapRequestParams {
            current_device_type: "iPhone".to_string(),
            current_model: "iPhone 11".to_string(),
            current_condition: "Good - Minor Scratches".to_string(),
            desired_device: "iPhone 13".to_string(),
            name: "Amina".to_string(),
            email: Some(String::new()),
            phone: "08012345678".to_string(),
            additional_info: None,
        };
        let record = SwapRequest::from(&params);
        assert_eq!(record.email, None);
        assert_eq!(record.additional_info, None);
    }

    #[test]
    fn test_sell_request_keeps_given_storage_and_email() {
        let params = SellRequestParams {
            device_type: "Samsung".to_string(),
            model: "Galaxy S21".to_string(),
            storage: Some("256GB".to_string()),
            condition: "Excellent - Like New".to_string(),
            battery_health: None,
            name: "Tunde".to_string(),
            email: Some("tunde@example.com".to_string()),
            phone: "08012345678".to_string(),
            additional_info: None,
        };
        let record = SellRequest::from(&params);
        assert_eq!(record.storage.as_deref(), Some("256GB"));
        assert_eq!(record.email.as_deref(), Some("tunde@example.com"));
    }

    #[test]
    fn test_repair_booking_drops_empty_email() {
        let params = RepairBookingParams {
            device_type: "Samsung".to_string(),
            device_model: "S22".to_string(),
            issue: "Screen Replacement".to_string(),
            issue_description: None,
            preferred_date: Some(String::new()),
            name: "Emeka".to_string(),
            phone: "08012345678".to_string(),
            email: Some(String::new()),
        };
        let record = RepairBooking::from(&params);
        assert_eq!(record.email, None);
        assert_eq!(record.issue_description, None);
        assert_eq!(record.preferred_date, None);
    }
}
