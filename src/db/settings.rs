use chrono::Utc;

use crate::db::models::DealershipSettings;
use crate::db::store::Storage;
use crate::error::ApiError;

/// Fixed primary key of the singleton row; the schema pins it with a CHECK.
pub const SETTINGS_ROW_ID: i64 = 1;

const DEFAULT_ADDRESS: &str = "123 Luxury Lane, Beverly Hills, CA 90210";
const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
const DEFAULT_EMAIL: &str = "info@elitecars.com";
const DEFAULT_HOURS_MON_SAT: &str = "9:00 AM - 8:00 PM";
const DEFAULT_HOURS_SUNDAY: &str = "10:00 AM - 6:00 PM";

impl Storage {
    /// Load the singleton settings row, creating it with the documented
    /// defaults if absent. The upsert guard means two concurrent first loads
    /// still end up with a single row.
    pub async fn load_or_init_settings(&self) -> Result<DealershipSettings, ApiError> {
        sqlx::query(
            r#"INSERT INTO dealership_settings
               (id, address, phone, email, business_hours_mon_sat, business_hours_sunday, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO NOTHING"#,
        )
        .bind(SETTINGS_ROW_ID)
        .bind(DEFAULT_ADDRESS)
        .bind(DEFAULT_PHONE)
        .bind(DEFAULT_EMAIL)
        .bind(DEFAULT_HOURS_MON_SAT)
        .bind(DEFAULT_HOURS_SUNDAY)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        let row = sqlx::query_as::<_, DealershipSettings>(
            "SELECT * FROM dealership_settings WHERE id = ?",
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_one(self.pool())
        .await?;
        Ok(row)
    }

    /// Explicit creation attempt with no upsert guard. Fails with a conflict
    /// once the singleton exists; there is deliberately no delete to undo it.
    pub async fn insert_settings(&self, s: &DealershipSettings) -> Result<(), ApiError> {
        sqlx::query(
            r#"INSERT INTO dealership_settings
               (id, address, phone, email, business_hours_mon_sat, business_hours_sunday, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(SETTINGS_ROW_ID)
        .bind(&s.address)
        .bind(&s.phone)
        .bind(&s.email)
        .bind(&s.business_hours_mon_sat)
        .bind(&s.business_hours_sunday)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|e| ApiError::on_unique(e, "Only one dealership settings row is allowed"))?;
        Ok(())
    }

    pub async fn update_settings(
        &self,
        s: &DealershipSettings,
    ) -> Result<DealershipSettings, ApiError> {
        let updated_at = Utc::now();
        sqlx::query(
            r#"UPDATE dealership_settings SET
               address = ?, phone = ?, email = ?,
               business_hours_mon_sat = ?, business_hours_sunday = ?, updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&s.address)
        .bind(&s.phone)
        .bind(&s.email)
        .bind(&s.business_hours_mon_sat)
        .bind(&s.business_hours_sunday)
        .bind(updated_at)
        .bind(SETTINGS_ROW_ID)
        .execute(self.pool())
        .await?;
        Ok(DealershipSettings {
            updated_at,
            ..s.clone()
        })
    }
}
