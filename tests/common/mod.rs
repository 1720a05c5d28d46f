#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use motordesk::{AppState, Storage, router::app_router};

pub struct TestApp {
    pub app: Router,
    pub store: Storage,
    db_path: PathBuf,
}

/// Fresh app over a throwaway SQLite file.
pub async fn spawn() -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "motordesk-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let pool = motordesk::db::connect(&database_url)
        .await
        .expect("failed to open test database");
    let store = Storage::new(pool);
    store.init_schema().await.expect("failed to init schema");

    let app = app_router(AppState::new(store.clone()));
    TestApp {
        app,
        store,
        db_path,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not JSON")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request("POST", uri, token, Some(body)).await
    }

    pub async fn patch(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request("PATCH", uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("DELETE", uri, token, None).await
    }

    /// Register a fresh admin and hand back their bearer token.
    pub async fn admin_token(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let (status, body) = self
            .post(
                "/accounts/register/",
                None,
                json!({
                    "email": format!("admin-{nanos}@example.com"),
                    "password": "correct-horse-battery",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "admin registration failed: {body}");
        body["data"]["token"]
            .as_str()
            .expect("token missing from register response")
            .to_string()
    }

    pub async fn create_manufacturer(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/manufacturers/",
                Some(token),
                json!({"name": name, "country": "Germany"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "manufacturer create failed: {body}");
        body["data"]["id"].as_i64().expect("manufacturer id")
    }

    pub async fn create_car(&self, token: &str, payload: Value) -> i64 {
        let (status, body) = self.post("/cars/", Some(token), payload).await;
        assert_eq!(status, StatusCode::CREATED, "car create failed: {body}");
        body["data"]["id"].as_i64().expect("car id")
    }

    pub fn cleanup(&self) {
        let _ = fs::remove_file(&self.db_path);
    }
}

/// Minimal valid car payload; callers override what they care about.
pub fn car_payload(manufacturer_id: i64, model_name: &str, body_type: &str, price: &str) -> Value {
    json!({
        "manufacturer_id": manufacturer_id,
        "body_type": body_type,
        "model_name": model_name,
        "model_year": 2021,
        "registration_year": 2021,
        "ownership": "1st Owner",
        "kilometers_driven": 42000,
        "fuel_type": "Petrol",
        "transmission": "Manual",
        "engine_cc": 1200,
        "mileage": "18.50",
        "color": "White",
        "price": price,
        "condition": "Good"
    })
}
