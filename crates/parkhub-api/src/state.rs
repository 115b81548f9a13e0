//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use parkhub_core::config::AppConfig;
use parkhub_service::Parking;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The parking allocator, itself a shared handle
    pub parking: Parking,
    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(config: AppConfig, parking: Parking) -> Self {
        Self {
            config: Arc::new(config),
            parking,
            started_at: Instant::now(),
        }
    }
}
