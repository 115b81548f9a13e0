//! The shipped configuration loads and drives the server wiring.

use axum::http::StatusCode;

use parkhub_core::config::AppConfig;
use parkhub_entity::Category;

use crate::helpers::TestApp;

fn shipped_config() -> AppConfig {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/config");
    AppConfig::load(dir, "test").expect("shipped config loads")
}

#[test]
fn test_shipped_config_matches_builtin_defaults() {
    let config = shipped_config();
    let defaults = AppConfig::default();

    assert_eq!(config.parking.slots, defaults.parking.slots);
    assert_eq!(config.parking.tariffs, defaults.parking.tariffs);
    assert_eq!(config.parking.capacity(), 3);
}

#[tokio::test]
async fn test_tariffs_from_config_price_each_category() {
    let app = TestApp::from_config(shipped_config());

    for (category, fee) in [
        ("primary", 20.0),
        ("secondary_compatible", 10.0),
        ("tertiary_compatible", 5.0),
    ] {
        let id = app.enter(category).await.expect("slot free");
        let (_, owed) = app
            .request("GET", &format!("/api/parking/tickets/{id}/owed"))
            .await;
        assert_eq!(owed["data"]["owed"], fee, "{category}");
    }
}

#[tokio::test]
async fn test_empty_category_rejects_entries() {
    let mut config = AppConfig::default();
    config.parking.slots.insert(Category::TertiaryCompatible, Vec::new());
    let app = TestApp::from_config(config);

    let (status, body) = app
        .request("POST", "/api/parking/tickets?category=tertiary_compatible")
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
}
