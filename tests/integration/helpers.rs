//! Shared test utilities for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use parkhub_api::{AppState, build_app};
use parkhub_core::config::AppConfig;
use parkhub_service::Parking;

/// A fully wired application sharing its allocator with the test body.
pub struct TestApp {
    pub router: Router,
    pub parking: Parking,
}

impl TestApp {
    /// App built from the default configuration.
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    /// App built the way the server binary builds it.
    pub fn from_config(config: AppConfig) -> Self {
        let parking = Parking::from_config(&config.parking).expect("valid parking config");
        Self::with_parking(config, parking)
    }

    /// App around an explicitly constructed allocator.
    pub fn with_parking(config: AppConfig, parking: Parking) -> Self {
        let router = build_app(AppState::new(config, parking.clone()));
        Self { router, parking }
    }

    /// Send a body-less request and decode the JSON response.
    pub async fn request(&self, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Enter through the API, returning the ticket id on success.
    pub async fn enter(&self, category: &str) -> Option<String> {
        let (status, body) = self
            .request("POST", &format!("/api/parking/tickets?category={category}"))
            .await;
        if status != StatusCode::OK {
            return None;
        }
        body["data"]["id"].as_str().map(str::to_string)
    }
}
