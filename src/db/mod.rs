pub mod catalog;
pub mod connection;
pub mod leads;
pub mod models;
pub mod redis;

pub use connection::DbClient;
