use chrono::Utc;

use crate::db::models::{Booking, BookingStatus, Enquiry, EnquiryStatus};
use crate::db::store::Storage;
use crate::error::ApiError;
use crate::types::orders::{NewBooking, NewEnquiry};

impl Storage {
    // -- bookings -----------------------------------------------------------

    pub async fn insert_booking(&self, new: &NewBooking) -> Result<Booking, ApiError> {
        let now = Utc::now();
        let res = sqlx::query(
            r#"INSERT INTO bookings
               (car_id, car_name, package_type, customer_name, email, phone,
                date, time, message, status, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(new.car_id)
        .bind(&new.car_name)
        .bind(new.package_type)
        .bind(&new.customer_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(new.date)
        .bind(new.time)
        .bind(&new.message)
        .bind(BookingStatus::Pending)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        self.get_booking(res.last_insert_rowid())
            .await?
            .ok_or_else(|| ApiError::Internal("booking vanished after insert".to_string()))
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let rows =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(self.pool())
                .await?;
        Ok(rows)
    }

    pub async fn get_booking(&self, id: i64) -> Result<Option<Booking>, ApiError> {
        let row = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Permissive by design: any enumerated status is accepted, there is no
    /// transition graph.
    pub async fn set_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<Option<Booking>, ApiError> {
        let res = sqlx::query("UPDATE bookings SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(Utc::now())
            .bind(id)
            .execute(self.pool())
            .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_booking(id).await
    }

    // -- enquiries ----------------------------------------------------------

    pub async fn insert_enquiry(&self, new: &NewEnquiry) -> Result<Enquiry, ApiError> {
        let now = Utc::now();
        let res = sqlx::query(
            r#"INSERT INTO enquiries
               (car_id, customer_name, email, phone, message, status, admin_notes,
                created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, '', ?, ?)"#,
        )
        .bind(new.car_id)
        .bind(&new.customer_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.message)
        .bind(EnquiryStatus::New)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        self.get_enquiry(res.last_insert_rowid())
            .await?
            .ok_or_else(|| ApiError::Internal("enquiry vanished after insert".to_string()))
    }

    pub async fn list_enquiries(&self) -> Result<Vec<Enquiry>, ApiError> {
        let rows =
            sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries ORDER BY created_at DESC")
                .fetch_all(self.pool())
                .await?;
        Ok(rows)
    }

    pub async fn get_enquiry(&self, id: i64) -> Result<Option<Enquiry>, ApiError> {
        let row = sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    pub async fn update_enquiry(
        &self,
        id: i64,
        status: Option<EnquiryStatus>,
        admin_notes: Option<&str>,
    ) -> Result<Option<Enquiry>, ApiError> {
        let Some(current) = self.get_enquiry(id).await? else {
            return Ok(None);
        };
        let status = status.unwrap_or(current.status);
        let notes = admin_notes.unwrap_or(&current.admin_notes);
        sqlx::query("UPDATE enquiries SET status = ?, admin_notes = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(notes)
            .bind(Utc::now())
            .bind(id)
            .execute(self.pool())
            .await?;
        self.get_enquiry(id).await
    }
}
