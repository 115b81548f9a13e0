//! The parking allocator: slot assignment, ticket issuance, and
//! payment-gated release under a single lock.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use parkhub_core::config::ParkingConfig;
use parkhub_core::result::AppResult;
use parkhub_entity::{Category, Ticket, TicketId};

use crate::error::ParkingError;
use crate::pool::{CategoryStatus, SlotPool};
use crate::pricing::{PricingPolicy, TariffPricing};
use crate::registry::TicketRegistry;

/// Snapshot of the lot's occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Per-category counts, ascending category order.
    pub categories: Vec<CategoryStatus>,
    /// Number of outstanding tickets.
    pub active_tickets: usize,
}

/// Pool and registry share one lock so that no reader ever sees a slot
/// taken without its ticket, or a ticket whose slot is already free.
#[derive(Debug, Default)]
struct ParkingState {
    pool: SlotPool,
    registry: TicketRegistry,
}

/// Paid parking lot.
///
/// Cars enter by requesting a [`Category`] and receive a [`Ticket`] bound to
/// a concrete slot. They leave by presenting the ticket id and a payment
/// that covers the amount computed by the [`PricingPolicy`].
///
/// Entry and release take the write lock; lookups, pricing queries and
/// listings take the read lock. Cloning is cheap and shares state.
#[derive(Clone)]
pub struct Parking {
    state: Arc<RwLock<ParkingState>>,
    pricing: Arc<dyn PricingPolicy>,
}

impl fmt::Debug for Parking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parking").finish_non_exhaustive()
    }
}

impl Parking {
    /// Create a lot from a category → slot names layout and a pricing
    /// policy.
    ///
    /// Fails if a slot name repeats within a category.
    pub fn new<I, N, S>(layout: I, pricing: impl PricingPolicy + 'static) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Category, N)>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool = SlotPool::new(layout)?;
        Ok(Self {
            state: Arc::new(RwLock::new(ParkingState {
                pool,
                registry: TicketRegistry::new(),
            })),
            pricing: Arc::new(pricing),
        })
    }

    /// Create a lot from the `[parking]` config section, priced by its
    /// tariffs.
    pub fn from_config(config: &ParkingConfig) -> AppResult<Self> {
        config.validate()?;
        let parking = Self::new(config.slots.clone(), TariffPricing::from_config(config))?;
        info!(
            capacity = config.capacity(),
            categories = config.slots.len(),
            "Parking lot initialized"
        );
        Ok(parking)
    }

    /// Admit a car asking for `category`.
    ///
    /// Restricted categories are served only from their own slots. The
    /// flexible category probes its own slots first, then each compatible
    /// category in ascending order; the ticket still records the requested
    /// category. Returns `None`, with no state change, when nothing fits.
    pub async fn enter(&self, category: Category) -> Option<Ticket> {
        let mut state = self.state.write().await;

        let slot = category
            .fallback_order()
            .iter()
            .find_map(|candidate| state.pool.try_assign(*candidate));

        let Some(slot) = slot else {
            debug!(
                category = %category,
                flexible = category.is_flexible(),
                "No compatible slot free"
            );
            return None;
        };

        let ticket = Ticket::issue(category, slot);
        state.registry.insert(ticket.clone());

        info!(
            ticket_id = %ticket.id,
            slot = %ticket.slot,
            requested = %category,
            fallback = ticket.is_fallback(),
            "Ticket issued"
        );

        Some(ticket)
    }

    /// Look up an outstanding ticket.
    pub async fn get_ticket(&self, id: TicketId) -> Option<Ticket> {
        let state = self.state.read().await;
        state.registry.get(&id).cloned()
    }

    /// Amount currently owed for `id`, or zero if no such ticket is
    /// outstanding.
    pub async fn check_owed(&self, id: TicketId) -> f64 {
        let state = self.state.read().await;
        state
            .registry
            .get(&id)
            .map(|ticket| self.pricing.owed(ticket))
            .unwrap_or(0.0)
    }

    /// Release the ticket `id` against `payment`, freeing its slot.
    ///
    /// The ticket is resolved before the payment is examined, so an unknown
    /// id is reported as such whatever the amount. A non-finite payment is
    /// rejected outright; any finite one, negative included, is compared
    /// against the amount owed.
    ///
    /// Returns the release time. On any error nothing changes: the ticket
    /// stays outstanding and may be retried with a larger payment. Once a
    /// release succeeds, further releases of the same id fail with
    /// [`ParkingError::UnknownTicket`].
    pub async fn leave(&self, id: TicketId, payment: f64) -> Result<DateTime<Utc>, ParkingError> {
        let mut state = self.state.write().await;

        let Some(ticket) = state.registry.get(&id) else {
            warn!(ticket_id = %id, "Release attempted with unknown ticket");
            return Err(ParkingError::UnknownTicket(id));
        };

        // NaN compares false against any amount and would slip past the gate.
        if !payment.is_finite() {
            warn!(ticket_id = %id, payment, "Rejected non-finite payment");
            return Err(ParkingError::InvalidPayment(payment));
        }

        let owed = self.pricing.owed(ticket);
        if payment < owed {
            warn!(ticket_id = %id, payment, owed, "Insufficient payment");
            return Err(ParkingError::InsufficientPayment {
                supplied: payment,
                required: owed,
            });
        }

        let ticket = state
            .registry
            .remove(&id)
            .ok_or(ParkingError::UnknownTicket(id))?;
        info!(ticket_id = %id, slot = %ticket.slot, payment, owed, "Ticket released");
        state.pool.release(ticket.slot);

        Ok(Utc::now())
    }

    /// All outstanding tickets, oldest first.
    pub async fn list_tickets(&self) -> Vec<Ticket> {
        let state = self.state.read().await;
        state.registry.ordered()
    }

    /// Free and total slot counts per category.
    pub async fn pool_status(&self) -> PoolStatus {
        let state = self.state.read().await;
        PoolStatus {
            categories: state.pool.status(),
            active_tickets: state.registry.len(),
        }
    }
}
