mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::spawn;

#[tokio::test]
async fn register_login_profile_logout_flow() {
    let app = spawn().await;

    let (status, body) = app
        .post(
            "/accounts/register/",
            None,
            json!({
                "email": "owner@elitecars.com",
                "password": "swordfish-47",
                "display_name": "Owner"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Registration successful"));
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 40);
    assert_eq!(body["data"]["user"]["email"], json!("owner@elitecars.com"));
    assert_eq!(body["data"]["user"]["role"], json!("admin"));

    let (status, body) = app.get("/accounts/profile/", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], json!("owner@elitecars.com"));
    assert_eq!(body["data"]["display_name"], json!("Owner"));

    // Logging in again hands back the same outstanding token.
    let (status, body) = app
        .post(
            "/accounts/login/",
            None,
            json!({"email": "owner@elitecars.com", "password": "swordfish-47"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token"].as_str().unwrap(), token);

    let (status, body) = app.post("/accounts/logout/", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Logged out successfully"));

    let (status, _) = app.get("/accounts/profile/", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    app.cleanup();
}

#[tokio::test]
async fn register_validates_email_and_password() {
    let app = spawn().await;

    let (status, _) = app
        .post(
            "/accounts/register/",
            None,
            json!({"email": "no-at-sign", "password": "longenough"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/accounts/register/",
            None,
            json!({"email": "a@b.com", "password": "short"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    app.cleanup();
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = spawn().await;
    let payload = json!({"email": "twice@example.com", "password": "longenough"});

    let (status, _) = app.post("/accounts/register/", None, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/accounts/register/", None, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    app.cleanup();
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = spawn().await;
    app.post(
        "/accounts/register/",
        None,
        json!({"email": "real@example.com", "password": "rightpassword"}),
    )
    .await;

    let (status, wrong_pw) = app
        .post(
            "/accounts/login/",
            None,
            json!({"email": "real@example.com", "password": "wrongpassword"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, no_user) = app
        .post(
            "/accounts/login/",
            None,
            json!({"email": "fake@example.com", "password": "rightpassword"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw["message"], no_user["message"]);
    app.cleanup();
}

#[tokio::test]
async fn token_prefix_variants_are_accepted() {
    let app = spawn().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .request("GET", "/accounts/profile/", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // DRF-style "Token" prefix works too.
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/accounts/profile/")
        .header("authorization", format!("Token {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.app.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    app.cleanup();
}
