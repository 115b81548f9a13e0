//! Parking ticket entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::{Category, TicketId};

use crate::slot::Slot;

/// Receipt proving a live slot allocation.
///
/// Tickets are keyed by [`TicketId`] everywhere; they are deliberately not
/// `Hash`, so a ticket can never be looked up by reconstructing its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique, randomly generated identifier.
    pub id: TicketId,
    /// The category the car asked for. Under fallback this differs from
    /// `slot.category`.
    pub requested_category: Category,
    /// When the ticket was issued. Pricing is computed from this.
    pub issued_at: DateTime<Utc>,
    /// The exact slot held by this ticket.
    pub slot: Slot,
}

impl Ticket {
    /// Issue a new ticket for `slot`, stamped with the current time.
    pub fn issue(requested_category: Category, slot: Slot) -> Self {
        Self::issue_at(requested_category, slot, Utc::now())
    }

    /// Issue a new ticket with an explicit issue time.
    pub fn issue_at(requested_category: Category, slot: Slot, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: TicketId::new(),
            requested_category,
            issued_at,
            slot,
        }
    }

    /// Whether the slot came from a category other than the one requested.
    pub fn is_fallback(&self) -> bool {
        self.requested_category != self.slot.category
    }

    /// Time elapsed since issue, relative to `now`. Never negative.
    pub fn parked_for(&self, now: DateTime<Utc>) -> chrono::Duration {
        (now - self.issued_at).max(chrono::Duration::zero())
    }
}
