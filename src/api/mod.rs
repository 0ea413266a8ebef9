//! API module containing route handlers and initialization logic
//!
//! This module is responsible for:
//! - Defining API routes and handlers
//! - Initializing the API router
//! - Providing API documentation through the index endpoint

/// Route handlers for the catalog and lead endpoints
pub mod handlers;

/// API documentation and index endpoint
pub mod index;

/// Router initialization and configuration
pub mod init;

pub use init::initialize_router;
