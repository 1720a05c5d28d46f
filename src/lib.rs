pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod service;
pub mod types;

pub use db::{SqlitePool, Storage};
pub use error::ApiError;
pub use router::AppState;
