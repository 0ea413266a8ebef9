//! Database models and types module.
//! This module contains the lead records, catalog rows, request params and API responses.

mod db_models; // Stored leads and catalog rows
mod params; // Incoming lead payloads
mod responses; // API response models

// Re-export all models for easier access
pub use db_models::*;
pub use params::*;
pub use responses::*;
