use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

// ---------------------------------------------------------------------------
// Closed string enums. Stored as TEXT; serde rejects anything outside the
// set, which is the only gate on status updates (no transition graph).
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum BodyType {
    Hatchback,
    Sedan,
    #[serde(rename = "SUV")]
    #[sqlx(rename = "SUV")]
    Suv,
    #[serde(rename = "MUV")]
    #[sqlx(rename = "MUV")]
    Muv,
    Coupe,
    Convertible,
    Pickup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum FuelType {
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    #[sqlx(rename = "CNG")]
    Cng,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum Transmission {
    Manual,
    Automatic,
    #[serde(rename = "AMT")]
    #[sqlx(rename = "AMT")]
    Amt,
    #[serde(rename = "CVT")]
    #[sqlx(rename = "CVT")]
    Cvt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Ownership {
    #[serde(rename = "1st Owner")]
    #[sqlx(rename = "1st Owner")]
    First,
    #[serde(rename = "2nd Owner")]
    #[sqlx(rename = "2nd Owner")]
    Second,
    #[serde(rename = "3rd Owner")]
    #[sqlx(rename = "3rd Owner")]
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum Condition {
    Excellent,
    Good,
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PackageType {
    Basic,
    Premium,
    Ultimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EnquiryStatus {
    New,
    Contacted,
    Converted,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

// ---------------------------------------------------------------------------
// Row models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Inventory row. Price and mileage are exact decimals persisted as TEXT,
/// so the row mapping is written out by hand.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Car {
    pub id: i64,
    pub manufacturer_id: i64,
    pub body_type: BodyType,
    pub model_name: String,
    pub variant: String,
    pub model_year: i64,
    pub registration_year: i64,
    pub ownership: Ownership,
    pub kilometers_driven: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub engine_cc: i64,
    pub mileage: Decimal,
    pub color: String,
    pub price: Decimal,
    pub is_negotiable: bool,
    pub insurance_valid_till: Option<NaiveDate>,
    pub rc_available: bool,
    pub puc_available: bool,
    pub loan_clearance: bool,
    pub condition: Condition,
    pub accident_history: bool,
    pub service_history: bool,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    Decimal::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl FromRow<'_, SqliteRow> for Car {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Car {
            id: row.try_get("id")?,
            manufacturer_id: row.try_get("manufacturer_id")?,
            body_type: row.try_get("body_type")?,
            model_name: row.try_get("model_name")?,
            variant: row.try_get("variant")?,
            model_year: row.try_get("model_year")?,
            registration_year: row.try_get("registration_year")?,
            ownership: row.try_get("ownership")?,
            kilometers_driven: row.try_get("kilometers_driven")?,
            fuel_type: row.try_get("fuel_type")?,
            transmission: row.try_get("transmission")?,
            engine_cc: row.try_get("engine_cc")?,
            mileage: decimal_column(row, "mileage")?,
            color: row.try_get("color")?,
            price: decimal_column(row, "price")?,
            is_negotiable: row.try_get("is_negotiable")?,
            insurance_valid_till: row.try_get("insurance_valid_till")?,
            rc_available: row.try_get("rc_available")?,
            puc_available: row.try_get("puc_available")?,
            loan_clearance: row.try_get("loan_clearance")?,
            condition: row.try_get("condition")?,
            accident_history: row.try_get("accident_history")?,
            service_history: row.try_get("service_history")?,
            description: row.try_get("description")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Column values for inserting a car; the storage layer owns id/created_at.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub manufacturer_id: i64,
    pub body_type: BodyType,
    pub model_name: String,
    pub variant: String,
    pub model_year: i64,
    pub registration_year: i64,
    pub ownership: Ownership,
    pub kilometers_driven: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub engine_cc: i64,
    pub mileage: Decimal,
    pub color: String,
    pub price: Decimal,
    pub is_negotiable: bool,
    pub insurance_valid_till: Option<NaiveDate>,
    pub rc_available: bool,
    pub puc_available: bool,
    pub loan_clearance: bool,
    pub condition: Condition,
    pub accident_history: bool,
    pub service_history: bool,
    pub description: String,
    pub is_active: bool,
}

/// Partial update; `None` leaves the column untouched.
/// `insurance_valid_till` uses a nested Option so the date can be cleared.
#[derive(Debug, Clone, Default)]
pub struct CarPatch {
    pub manufacturer_id: Option<i64>,
    pub body_type: Option<BodyType>,
    pub model_name: Option<String>,
    pub variant: Option<String>,
    pub model_year: Option<i64>,
    pub registration_year: Option<i64>,
    pub ownership: Option<Ownership>,
    pub kilometers_driven: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub engine_cc: Option<i64>,
    pub mileage: Option<Decimal>,
    pub color: Option<String>,
    pub price: Option<Decimal>,
    pub is_negotiable: Option<bool>,
    pub insurance_valid_till: Option<Option<NaiveDate>>,
    pub rc_available: Option<bool>,
    pub puc_available: Option<bool>,
    pub loan_clearance: Option<bool>,
    pub condition: Option<Condition>,
    pub accident_history: Option<bool>,
    pub service_history: Option<bool>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CarImage {
    pub id: i64,
    pub car_id: i64,
    pub image: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CarFeature {
    pub id: i64,
    pub car_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DealershipSettings {
    pub id: i64,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub business_hours_mon_sat: String,
    pub business_hours_sunday: String,
    pub updated_at: DateTime<Utc>,
}

/// Immutable historical fact; deliberately has no FK back to `cars` so the
/// record survives car deletion. Price is the snapshotted display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct RecentlySold {
    pub id: i64,
    pub car_name: String,
    pub price: String,
    pub sold_date: NaiveDate,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct Booking {
    pub id: i64,
    pub car_id: i64,
    pub car_name: String,
    pub package_type: PackageType,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct Enquiry {
    pub id: i64,
    pub car_id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: EnquiryStatus,
    pub admin_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}
