use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

/// Standard success envelope: `{success, message, data?}`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success<T: Serialize>(data: T, message: &str) -> Response {
    respond(StatusCode::OK, Some(data), message)
}

pub fn created<T: Serialize>(data: T, message: &str) -> Response {
    respond(StatusCode::CREATED, Some(data), message)
}

pub fn message_only(message: &str) -> Response {
    respond::<()>(StatusCode::OK, None, message)
}

fn respond<T: Serialize>(status: StatusCode, data: Option<T>, message: &str) -> Response {
    let body = Envelope {
        success: true,
        message: message.to_string(),
        data,
    };
    (status, Json(body)).into_response()
}

/// API response message catalog.
pub mod messages {
    pub const SUCCESS: &str = "Operation successful";
    pub const UPDATED: &str = "Resource updated successfully";

    pub const LOGIN_SUCCESS: &str = "Login successful";
    pub const LOGOUT_SUCCESS: &str = "Logged out successfully";
    pub const REGISTER_SUCCESS: &str = "Registration successful";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

    pub const CAR_CREATED: &str = "Car added successfully";
    pub const CAR_UPDATED: &str = "Car updated successfully";
    pub const CAR_DELETED: &str = "Car deleted successfully";

    pub const BOOKING_CREATED: &str = "Booking created successfully";
    pub const BOOKING_UPDATED: &str = "Booking updated successfully";

    pub const ENQUIRY_CREATED: &str = "Enquiry submitted successfully. We'll contact you soon!";
    pub const ENQUIRY_UPDATED: &str = "Enquiry updated successfully";

    pub const SOLD_CREATED: &str = "Recently sold car added successfully";
    pub const SOLD_TRANSITION: &str = "Car added to recently sold successfully";
}
