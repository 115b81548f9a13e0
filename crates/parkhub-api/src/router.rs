//! Route definitions for the ParkHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes, threading `state` through them.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(parking_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Ticket lifecycle and pool status
fn parking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/parking/tickets",
            post(handlers::parking::create_ticket).get(handlers::parking::list_tickets),
        )
        .route(
            "/parking/tickets/{id}",
            get(handlers::parking::get_ticket).delete(handlers::parking::release_ticket),
        )
        .route("/parking/tickets/{id}/owed", get(handlers::parking::get_owed))
        .route("/parking/pool", get(handlers::parking::pool_status))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
