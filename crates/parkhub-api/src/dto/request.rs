//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

/// Query for `POST /api/parking/tickets`.
#[derive(Debug, Deserialize, Validate)]
pub struct EnterQuery {
    /// Requested category, canonical name or engine-type alias.
    #[validate(length(min = 1, max = 32, message = "category must be 1-32 characters"))]
    pub category: String,
}

/// Query for `DELETE /api/parking/tickets/{id}`.
///
/// The amount is passed through unchecked; the allocator resolves the
/// ticket before it judges the payment.
#[derive(Debug, Deserialize)]
pub struct LeaveQuery {
    /// Amount presented to settle the ticket.
    pub payment: f64,
}
