//! # parkhub-api
//!
//! HTTP API layer for ParkHub built on Axum.
//!
//! Exposes the parking allocator as REST endpoints under `/api`, with
//! request logging, CORS, compression, and error-to-status mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
