//! Core types and logic for the hidrossistema drought dashboard.
//!
//! - `gauge` and `geometry`: severity banding of the drought gauge and its SVG arcs
//! - `state_duration`: days spent in the current drought state
//! - `models`: typed backend payloads
//! - `client` (feature `api`): async REST client for native builds

#[cfg(feature = "api")]
pub mod client;
pub mod drought_state;
pub mod endpoints;
pub mod gauge;
pub mod geometry;
pub mod models;
pub mod simulation;
pub mod state_duration;
pub mod units;
