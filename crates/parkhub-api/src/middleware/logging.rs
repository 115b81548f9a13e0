//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Logs method, route template, status, and duration.
///
/// Ticket issuance and release are logged at info; reads at debug. Server
/// errors are raised to warn regardless of route.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    if response.status().is_server_error() {
        warn!(method = %method, route = %route, status, duration_ms, "HTTP request failed");
    } else if is_ticket_mutation(&method, &route) {
        info!(method = %method, route = %route, status, duration_ms, "Ticket request");
    } else {
        debug!(method = %method, route = %route, status, duration_ms, "HTTP request");
    }

    response
}

fn is_ticket_mutation(method: &Method, route: &str) -> bool {
    let mutating = *method == Method::POST || *method == Method::DELETE;
    mutating && route.starts_with("/api/parking/tickets")
}
