use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::db::models::{BookingStatus, EnquiryStatus, PackageType};

#[derive(Debug, Deserialize)]
pub struct BookingCreate {
    pub car_id: i64,
    pub package_type: PackageType,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub message: String,
}

/// Storage-level booking insert; `car_name` is the server-side snapshot of
/// the car's display name at booking time.
#[derive(Debug)]
pub struct NewBooking {
    pub car_id: i64,
    pub car_name: String,
    pub package_type: PackageType,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
pub struct EnquiryCreate {
    pub car_id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug)]
pub struct NewEnquiry {
    pub car_id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnquiryUpdate {
    pub status: Option<EnquiryStatus>,
    pub admin_notes: Option<String>,
}
