//! End-to-end tests for the ParkHub server wiring.

mod capacity_test;
mod config_test;
mod helpers;
mod lifecycle_test;
