//! Business logic between the handlers and the storage layer.

pub mod auth;
pub mod cars;
pub mod orders;
pub mod related;
pub mod settings;
