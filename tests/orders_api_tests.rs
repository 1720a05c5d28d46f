mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{car_payload, spawn};

#[tokio::test]
async fn booking_lifecycle() {
    let app = spawn().await;
    let token = app.admin_token().await;
    let maker = app.create_manufacturer(&token, "BMW").await;
    let car_id = app
        .create_car(&token, car_payload(maker, "X5", "SUV", "4500000.00"))
        .await;

    let (status, body) = app
        .post(
            "/bookings/",
            None,
            json!({
                "car_id": car_id,
                "package_type": "premium",
                "customer_name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "9876543210",
                "date": "2026-09-15",
                "time": "10:30:00",
                "message": "Morning slot preferred"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "booking failed: {body}");
    assert_eq!(body["message"], json!("Booking created successfully"));
    assert_eq!(body["data"]["status"], json!("pending"));
    // Display name is snapshotted server-side from the car row.
    assert_eq!(body["data"]["car_name"], json!("BMW X5 (2021)"));
    let booking_id = body["data"]["id"].as_i64().unwrap();

    // Listing and status changes are admin-only.
    let (status, _) = app.get("/bookings/", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, body) = app.get("/bookings/", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .patch(
            &format!("/bookings/{booking_id}/status/"),
            Some(&token),
            json!({"status": "confirmed"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("confirmed"));

    // Any listed status is accepted, in any order.
    let (status, body) = app
        .patch(
            &format!("/bookings/{booking_id}/status/"),
            Some(&token),
            json!({"status": "pending"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("pending"));

    // Anything outside the set is a validation error.
    let (status, body) = app
        .patch(
            &format!("/bookings/{booking_id}/status/"),
            Some(&token),
            json!({"status": "sideways"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    app.cleanup();
}

#[tokio::test]
async fn booking_unknown_car_is_not_found() {
    let app = spawn().await;
    let (status, body) = app
        .post(
            "/bookings/",
            None,
            json!({
                "car_id": 777,
                "package_type": "basic",
                "customer_name": "Nobody",
                "email": "nobody@example.com",
                "phone": "9876543210",
                "date": "2026-09-15",
                "time": "11:00:00"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    app.cleanup();
}

#[tokio::test]
async fn booking_rejects_bad_phone() {
    let app = spawn().await;
    let token = app.admin_token().await;
    let maker = app.create_manufacturer(&token, "Honda").await;
    let car_id = app
        .create_car(&token, car_payload(maker, "City", "Sedan", "900000.00"))
        .await;

    let (status, body) = app
        .post(
            "/bookings/",
            None,
            json!({
                "car_id": car_id,
                "package_type": "basic",
                "customer_name": "Short Phone",
                "email": "short@example.com",
                "phone": "12345",
                "date": "2026-09-20",
                "time": "15:00:00"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    app.cleanup();
}

#[tokio::test]
async fn enquiry_lifecycle() {
    let app = spawn().await;
    let token = app.admin_token().await;
    let maker = app.create_manufacturer(&token, "Toyota").await;
    let car_id = app
        .create_car(&token, car_payload(maker, "Fortuner", "SUV", "3500000.00"))
        .await;

    let (status, body) = app
        .post(
            "/enquiries/",
            None,
            json!({
                "car_id": car_id,
                "customer_name": "Ravi Kumar",
                "email": "ravi@example.com",
                "phone": "9123456780",
                "message": "Is the price negotiable?"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "enquiry failed: {body}");
    assert_eq!(
        body["message"],
        json!("Enquiry submitted successfully. We'll contact you soon!")
    );
    assert_eq!(body["data"]["status"], json!("new"));
    let enquiry_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .patch(
            &format!("/enquiries/{enquiry_id}/status/"),
            Some(&token),
            json!({"status": "contacted", "admin_notes": "Called, will visit Saturday"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("contacted"));
    assert_eq!(body["data"]["admin_notes"], json!("Called, will visit Saturday"));

    // Notes-only update leaves the status alone.
    let (status, body) = app
        .patch(
            &format!("/enquiries/{enquiry_id}/status/"),
            Some(&token),
            json!({"admin_notes": "No show"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("contacted"));
    assert_eq!(body["data"]["admin_notes"], json!("No show"));

    let (status, _) = app
        .patch(
            "/enquiries/9999/status/",
            Some(&token),
            json!({"status": "closed"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    app.cleanup();
}

#[tokio::test]
async fn enquiry_unknown_car_is_not_found() {
    let app = spawn().await;
    let (status, body) = app
        .post(
            "/enquiries/",
            None,
            json!({
                "car_id": 555,
                "customer_name": "Ghost",
                "email": "ghost@example.com",
                "phone": "9123456780"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    app.cleanup();
}
