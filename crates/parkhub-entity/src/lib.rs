//! # parkhub-entity
//!
//! Domain entity models for ParkHub. Every struct in this crate is an
//! immutable value: slots are created from configuration and never change,
//! tickets are created on entry and dropped on release.

pub mod slot;
pub mod ticket;

pub use parkhub_core::types::{Category, TicketId};
pub use slot::Slot;
pub use ticket::Ticket;
