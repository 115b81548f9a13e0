//! Pricing policies: how much a ticket owes right now.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use parkhub_core::config::{ParkingConfig, TariffConfig};
use parkhub_entity::{Category, Ticket};

/// Computes the amount owed for an outstanding ticket.
///
/// Implementations may read the wall clock, so two calls for the same
/// ticket can return different amounts. They are invoked while the
/// allocator lock is held and must not block.
///
/// Any `Fn(&Ticket) -> f64` closure is a pricing policy.
pub trait PricingPolicy: Send + Sync {
    /// Amount owed for `ticket` at the current time.
    fn owed(&self, ticket: &Ticket) -> f64;
}

impl<F> PricingPolicy for F
where
    F: Fn(&Ticket) -> f64 + Send + Sync,
{
    fn owed(&self, ticket: &Ticket) -> f64 {
        self(ticket)
    }
}

/// Tariff-based pricing: a base fee plus an hourly rate over whole hours
/// parked, selected by the ticket's *requested* category.
///
/// A car that asked for a primary slot pays the primary tariff even when it
/// was parked in an electric slot. Categories without a tariff are free.
#[derive(Debug, Clone, Default)]
pub struct TariffPricing {
    tariffs: BTreeMap<Category, TariffConfig>,
}

impl TariffPricing {
    /// Create a pricing policy from explicit tariffs.
    pub fn new(tariffs: BTreeMap<Category, TariffConfig>) -> Self {
        Self { tariffs }
    }

    /// Create a pricing policy from the `[parking.tariffs]` config section.
    pub fn from_config(config: &ParkingConfig) -> Self {
        Self::new(config.tariffs.clone())
    }

    /// Amount owed for `ticket` if it were released at `now`.
    pub fn owed_at(&self, ticket: &Ticket, now: DateTime<Utc>) -> f64 {
        let Some(tariff) = self.tariffs.get(&ticket.requested_category) else {
            return 0.0;
        };
        let hours = ticket.parked_for(now).num_hours() as f64;
        tariff.base_fee + tariff.hourly_rate * hours
    }
}

impl PricingPolicy for TariffPricing {
    fn owed(&self, ticket: &Ticket) -> f64 {
        self.owed_at(ticket, Utc::now())
    }
}
