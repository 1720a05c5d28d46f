use crate::db::Storage;
use crate::db::models::{Booking, Enquiry};
use crate::error::ApiError;
use crate::service::cars::display_name;
use crate::types::orders::{BookingCreate, EnquiryCreate, NewBooking, NewEnquiry};

/// 10 or 11 digits after stripping separators.
pub fn validate_phone(phone: &str) -> Result<(), ApiError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=11).contains(&digits) {
        return Err(ApiError::Validation(
            "Phone number must be 10 or 11 digits".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    Ok(())
}

/// Public booking creation. An unknown car id is a 404, not a constraint
/// blowup; the car's display name is snapshotted into the booking row.
pub async fn create_booking(store: &Storage, payload: BookingCreate) -> Result<Booking, ApiError> {
    validate_email(&payload.email)?;
    validate_phone(&payload.phone)?;

    let car = store
        .get_car(payload.car_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Car"))?;
    let car_name = display_name(store, &car).await?;

    store
        .insert_booking(&NewBooking {
            car_id: car.id,
            car_name,
            package_type: payload.package_type,
            customer_name: payload.customer_name,
            email: payload.email,
            phone: payload.phone,
            date: payload.date,
            time: payload.time,
            message: payload.message,
        })
        .await
}

pub async fn create_enquiry(store: &Storage, payload: EnquiryCreate) -> Result<Enquiry, ApiError> {
    validate_email(&payload.email)?;
    validate_phone(&payload.phone)?;

    let car = store
        .get_car(payload.car_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Car"))?;

    store
        .insert_enquiry(&NewEnquiry {
            car_id: car.id,
            customer_name: payload.customer_name,
            email: payload.email,
            phone: payload.phone,
            message: payload.message,
        })
        .await
}
