//! Shared Dioxus components and browser fetch bridge for the hidrossistema dashboards.
//!
//! This crate provides:
//! - `fetch`: typed GET requests against the backend via `web-sys` fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (gauge, cards, volume chart, tables, selectors)

pub mod components;
pub mod fetch;
pub mod state;
