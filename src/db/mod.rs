//! Database module: models, schema and queries for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, plus the closed string enums
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `store.rs` and the resource modules: the `Storage` query surface

pub mod models;
pub mod schema;
pub mod store;

mod accounts;
mod cars;
mod orders;
mod settings;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub use schema::SQLITE_INIT;
pub use settings::SETTINGS_ROW_ID;
pub use store::Storage;

pub type SqlitePool = Pool<Sqlite>;

/// Open (and create if missing) the SQLite database behind `database_url`.
/// Foreign keys are enforced per connection; cascades depend on it.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new().connect_with(opts).await
}
