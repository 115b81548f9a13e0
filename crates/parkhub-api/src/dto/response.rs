//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_entity::TicketId;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Amount currently owed for a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwedResponse {
    /// Ticket queried.
    pub ticket_id: TicketId,
    /// Amount owed; zero for unknown tickets.
    pub owed: f64,
}

/// Proof of a successful release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResponse {
    /// Ticket released.
    pub ticket_id: TicketId,
    /// When the ticket was invalidated.
    pub released_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
