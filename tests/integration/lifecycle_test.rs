//! Ticket lifecycle through the HTTP surface and the shared allocator.

use axum::http::StatusCode;

use parkhub_core::config::AppConfig;
use parkhub_entity::{Category, Ticket};
use parkhub_service::Parking;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_enter_pay_leave_frees_the_slot() {
    let app = TestApp::new();

    let id = app.enter("primary").await.expect("slot A free");
    assert!(app.enter("primary").await.is_some(), "falls back to B");
    assert!(app.enter("primary").await.is_some(), "falls back to C");
    assert!(app.enter("primary").await.is_none(), "lot is full");

    let (status, body) = app
        .request("DELETE", &format!("/api/parking/tickets/{id}?payment=20"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ticket_id"], id);

    let again = app.enter("primary").await.expect("A is free again");
    let (_, ticket) = app
        .request("GET", &format!("/api/parking/tickets/{again}"))
        .await;
    assert_eq!(ticket["data"]["slot"]["name"], "A");
}

#[tokio::test]
async fn test_fallback_ticket_is_priced_by_requested_category() {
    let app = TestApp::new();

    // Occupy A so the next primary request lands in B.
    app.enter("primary").await.expect("A");
    let id = app.enter("gas").await.expect("B");

    let (_, ticket) = app
        .request("GET", &format!("/api/parking/tickets/{id}"))
        .await;
    assert_eq!(ticket["data"]["requested_category"], "primary");
    assert_eq!(ticket["data"]["slot"]["category"], "secondary_compatible");

    let (_, owed) = app
        .request("GET", &format!("/api/parking/tickets/{id}/owed"))
        .await;
    assert_eq!(owed["data"]["owed"], 20.0);

    let (status, body) = app
        .request("DELETE", &format!("/api/parking/tickets/{id}?payment=10"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INSUFFICIENT_PAYMENT");
}

#[tokio::test]
async fn test_http_and_direct_calls_share_state() {
    let app = TestApp::new();

    let direct = app
        .parking
        .enter(Category::TertiaryCompatible)
        .await
        .expect("C free");

    let (_, listed) = app.request("GET", "/api/parking/tickets").await;
    let tickets: Vec<Ticket> = serde_json::from_value(listed["data"].clone()).unwrap();
    assert_eq!(tickets, vec![direct.clone()]);

    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/parking/tickets/{}?payment=5", direct.id),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.parking.get_ticket(direct.id).await.is_none());
}

#[tokio::test]
async fn test_custom_pricing_policy_drives_release() {
    let parking = Parking::new(
        [(Category::Primary, vec!["P1"])],
        |ticket: &Ticket| match ticket.slot.name.as_str() {
            "P1" => 42.5,
            _ => 0.0,
        },
    )
    .unwrap();
    let app = TestApp::with_parking(AppConfig::default(), parking);

    let id = app.enter("primary").await.expect("P1");
    let (_, owed) = app
        .request("GET", &format!("/api/parking/tickets/{id}/owed"))
        .await;
    assert_eq!(owed["data"]["owed"], 42.5);

    let (status, _) = app
        .request("DELETE", &format!("/api/parking/tickets/{id}?payment=42.5"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, pool) = app.request("GET", "/api/parking/pool").await;
    assert_eq!(pool["data"]["active_tickets"], 0);
    assert_eq!(pool["data"]["categories"][0]["free"], 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_entries_never_share_a_slot() {
    let app = TestApp::new();

    let attempts = (0..12).map(|_| app.enter("primary"));
    let ids: Vec<String> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(ids.len(), 3);

    let tickets = app.parking.list_tickets().await;
    let mut slots: Vec<_> = tickets.iter().map(|t| t.slot.clone()).collect();
    slots.sort_by(|a, b| (a.category, &a.name).cmp(&(b.category, &b.name)));
    slots.dedup();
    assert_eq!(slots.len(), 3);
}
