use axum::Json;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Static JSON response for the index endpoint
static INDEX_JSON: OnceLock<Value> = OnceLock::new();

fn lead_params(fields: &[(&str, bool)]) -> Value {
    let params = fields
        .iter()
        .map(|(name, required)| {
            (
                name.to_string(),
                json!({ "type": "string", "required": required }),
            )
        })
        .collect::<serde_json::Map<String, Value>>();
    Value::Object(params)
}

/// Handler for the index endpoint that lists the API surface
///
/// # Endpoint: GET /api/
pub fn index() -> Json<Value> {
    let value = INDEX_JSON.get_or_init(|| {
        json!({
            "message": "Welcome to Gadget Haven API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": [
                {
                    "path": "/products",
                    "method": "GET",
                    "description": "List products, optionally filtered by category",
                    "params": {
                        "category": {
                            "type": "string",
                            "required": false,
                            "description": "Category name, \"All\" returns every product"
                        }
                    }
                },
                {
                    "path": "/products/:product_id",
                    "method": "GET",
                    "description": "Get a single product",
                    "params": {}
                },
                {
                    "path": "/categories",
                    "method": "GET",
                    "description": "List product categories, \"All\" first",
                    "params": {}
                },
                {
                    "path": "/testimonials",
                    "method": "GET",
                    "description": "List customer testimonials",
                    "params": {}
                },
                {
                    "path": "/repair-services",
                    "method": "GET",
                    "description": "List repair services with starting prices",
                    "params": {}
                },
                {
                    "path": "/contact",
                    "method": "POST",
                    "description": "Send a contact message",
                    "params": lead_params(&[
                        ("name", true),
                        ("email", true),
                        ("phone", true),
                        ("message", true),
                    ])
                },
                {
                    "path": "/sell-request",
                    "method": "POST",
                    "description": "Request a quote for selling a device",
                    "params": lead_params(&[
                        ("device_type", true),
                        ("model", true),
                        ("storage", false),
                        ("condition", true),
                        ("battery_health", false),
                        ("name", true),
                        ("email", false),
                        ("phone", true),
                        ("additional_info", false),
                    ])
                },
                {
                    "path": "/swap-request",
                    "method": "POST",
                    "description": "Request a device swap",
                    "params": lead_params(&[
                        ("current_device_type", true),
                        ("current_model", true),
                        ("current_condition", true),
                        ("desired_device", true),
                        ("name", true),
                        ("email", false),
                        ("phone", true),
                        ("additional_info", false),
                    ])
                },
                {
                    "path": "/repair-booking",
                    "method": "POST",
                    "description": "Book a repair",
                    "params": lead_params(&[
                        ("device_type", true),
                        ("device_model", true),
                        ("issue", true),
                        ("issue_description", false),
                        ("name", true),
                        ("email", false),
                        ("phone", true),
                        ("preferred_date", false),
                    ])
                },
                {
                    "path": "/price-quote",
                    "method": "POST",
                    "description": "Ask for the current price of a product",
                    "params": lead_params(&[
                        ("product_name", true),
                        ("product_category", true),
                        ("name", true),
                        ("email", false),
                        ("phone", true),
                        ("message", false),
                    ])
                },
                {
                    "path": "/sell-requests",
                    "method": "GET",
                    "description": "List stored sell requests (requires Authorization header)",
                    "params": {}
                },
                {
                    "path": "/swap-requests",
                    "method": "GET",
                    "description": "List stored swap requests (requires Authorization header)",
                    "params": {}
                },
                {
                    "path": "/repair-bookings",
                    "method": "GET",
                    "description": "List stored repair bookings (requires Authorization header)",
                    "params": {}
                },
                {
                    "path": "/health",
                    "method": "GET",
                    "description": "Database and cache connectivity",
                    "params": {}
                }
            ]
        })
    });

    Json(value.clone())
}
