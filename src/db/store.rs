use crate::db::SqlitePool;
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;

/// Query surface over the SQLite pool. Resource-specific queries live in the
/// sibling modules (`cars`, `orders`, `settings`, `accounts`) as further
/// `impl Storage` blocks.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands
        // but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}
