//! Reusable Dioxus RSX components for the dashboard pages.

mod dashboard_header;
mod drought_gauge;
mod empty_reservoir_state;
mod error_display;
mod history_table;
mod loading_spinner;
mod metric_cards;
mod reservoir_selector;
mod volume_chart;

pub use dashboard_header::DashboardHeader;
pub use drought_gauge::DroughtGauge;
pub use empty_reservoir_state::EmptyReservoirState;
pub use error_display::ErrorDisplay;
pub use history_table::{volume_cell, RecentHistoryTable};
pub use loading_spinner::LoadingSpinner;
pub use metric_cards::{days_in_state, since_caption, MetricCards};
pub use reservoir_selector::ReservoirSelector;
pub use volume_chart::{date_tick, VolumeChart};
