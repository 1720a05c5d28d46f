mod common;

use axum::http::StatusCode;
use serde_json::json;

use motordesk::ApiError;

use common::{car_payload, spawn};

#[tokio::test]
async fn settings_initialize_once_with_defaults() {
    let app = spawn().await;

    let (status, body) = app.get("/settings/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["address"],
        json!("123 Luxury Lane, Beverly Hills, CA 90210")
    );
    assert_eq!(body["data"]["business_hours"]["mon_sat"], json!("9:00 AM - 8:00 PM"));
    assert_eq!(body["data"]["business_hours"]["sunday"], json!("10:00 AM - 6:00 PM"));

    // Repeated loads converge on the same singleton row.
    let first = app.store.load_or_init_settings().await.unwrap();
    let second = app.store.load_or_init_settings().await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.id, second.id);
    assert_eq!(first.address, second.address);

    // A plain insert on top of the singleton is refused, and there is no
    // delete to clear the way.
    let err = app.store.insert_settings(&first).await.unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)), "got {err:?}");
    app.cleanup();
}

#[tokio::test]
async fn settings_patch_accepts_nested_business_hours() {
    let app = spawn().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .patch("/settings/", None, json!({"phone": "+91 98765 43210"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .patch(
            "/settings/",
            Some(&token),
            json!({
                "phone": "+91 98765 43210",
                "business_hours": {"sunday": "Closed"}
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["phone"], json!("+91 98765 43210"));
    assert_eq!(body["data"]["business_hours"]["sunday"], json!("Closed"));
    // Untouched fields keep their values.
    assert_eq!(body["data"]["business_hours"]["mon_sat"], json!("9:00 AM - 8:00 PM"));

    let (status, body) = app.get("/settings/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["phone"], json!("+91 98765 43210"));
    app.cleanup();
}

#[tokio::test]
async fn sold_transition_snapshots_and_deactivates() {
    let app = spawn().await;
    let token = app.admin_token().await;
    let maker = app.create_manufacturer(&token, "BMW").await;

    let mut payload = car_payload(maker, "X5", "SUV", "4500000.00");
    payload["images"] = json!(["https://img.example/main.jpg", "https://img.example/alt.jpg"]);
    let car_id = app.create_car(&token, payload).await;

    let (status, _) = app
        .post("/recently-sold/add-car/", None, json!({"car_id": car_id}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post(
            "/recently-sold/add-car/",
            Some(&token),
            json!({"car_id": car_id, "sold_date": "2026-08-20"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "transition failed: {body}");
    assert_eq!(body["message"], json!("Car added to recently sold successfully"));
    assert_eq!(body["data"]["car_name"], json!("BMW X5 (2021)"));
    assert_eq!(body["data"]["price"], json!("4500000.00"));
    assert_eq!(body["data"]["image"], json!("https://img.example/main.jpg"));
    assert_eq!(body["data"]["sold_date"], json!("2026-08-20"));

    // Gone from the public listing, present in the sold history.
    let (status, body) = app.get("/cars/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, body) = app.get("/recently-sold/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // The row itself survives, just deactivated.
    let (status, body) = app.get(&format!("/cars/{car_id}/"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], json!(false));

    let (status, _) = app
        .post(
            "/recently-sold/add-car/",
            Some(&token),
            json!({"car_id": 9999}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    app.cleanup();
}

#[tokio::test]
async fn sold_records_can_be_added_directly_and_listing_caps() {
    let app = spawn().await;
    let token = app.admin_token().await;

    for i in 0..12 {
        let (status, _) = app
            .post(
                "/recently-sold/",
                Some(&token),
                json!({
                    "car_name": format!("Audi A{i} (2020)"),
                    "price": "2500000.00",
                    "sold_date": "2026-07-01"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Default window is the latest ten.
    let (status, body) = app.get("/recently-sold/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (status, body) = app.get("/recently-sold/?limit=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    app.cleanup();
}
