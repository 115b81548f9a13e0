//! # parkhub-service
//!
//! The parking core: typed slot pools with fallback assignment, the
//! ticket registry, pricing, and payment-gated release.
//!
//! ## Modules
//!
//! - `pool`: per-category FIFO free lists
//! - `registry`: id-keyed store of outstanding tickets
//! - `pricing`: the injectable [`PricingPolicy`] and the configured tariff
//! - `parking`: the [`Parking`] allocator tying them together under one lock
//! - `error`: release failures

pub mod error;
pub mod parking;
pub mod pool;
pub mod pricing;
pub mod registry;

pub use error::ParkingError;
pub use parking::{Parking, PoolStatus};
pub use pool::{CategoryStatus, SlotPool};
pub use pricing::{PricingPolicy, TariffPricing};
pub use registry::TicketRegistry;
