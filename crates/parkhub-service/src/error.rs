//! Release failures.

use thiserror::Error;

use parkhub_core::error::{AppError, ErrorKind};
use parkhub_entity::TicketId;

/// Why a `leave` call was rejected.
///
/// Every variant leaves the allocator untouched: the ticket stays
/// outstanding (if it existed) and its slot stays assigned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParkingError {
    /// The ticket was never issued or has already been released.
    #[error("Unknown ticket {0}")]
    UnknownTicket(TicketId),
    /// The payment does not cover the amount currently owed.
    #[error("Insufficient payment: {supplied}, required: {required}")]
    InsufficientPayment {
        /// Amount presented by the caller.
        supplied: f64,
        /// Amount owed at the time of the call.
        required: f64,
    },
    /// The payment is infinite or not a number.
    #[error("Invalid payment: {0}")]
    InvalidPayment(f64),
}

impl From<ParkingError> for AppError {
    fn from(err: ParkingError) -> Self {
        let kind = match err {
            ParkingError::UnknownTicket(_) => ErrorKind::UnknownTicket,
            ParkingError::InsufficientPayment { .. } => ErrorKind::Payment,
            ParkingError::InvalidPayment(_) => ErrorKind::Validation,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
