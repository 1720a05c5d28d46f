//! Request payloads and response DTOs for the HTTP surface.

pub mod accounts;
pub mod cars;
pub mod orders;
pub mod settings;
