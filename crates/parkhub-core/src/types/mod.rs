//! Core type definitions used across the ParkHub workspace.

pub mod category;
pub mod id;

pub use category::Category;
pub use id::TicketId;
