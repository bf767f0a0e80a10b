//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hds_core::models::{ChartDataPoint, DashboardSummary, HistoryEntry, Reservoir};

/// Shared application state for the dashboard pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a request is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Available reservoirs
    pub reservoirs: Signal<Vec<Reservoir>>,
    /// Currently selected reservoir id (None until the user picks one)
    pub selected_reservoir: Signal<Option<i64>>,
    pub summary: Signal<Option<DashboardSummary>>,
    pub history: Signal<Vec<HistoryEntry>>,
    pub chart: Signal<Vec<ChartDataPoint>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            reservoirs: Signal::new(Vec::new()),
            selected_reservoir: Signal::new(None),
            summary: Signal::new(None),
            history: Signal::new(Vec::new()),
            chart: Signal::new(Vec::new()),
        }
    }

    /// Name of the selected reservoir, if it is in the loaded list.
    pub fn selected_name(&self) -> Option<String> {
        let id = (self.selected_reservoir)()?;
        self.reservoirs
            .read()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.nome.clone())
    }

    /// Drop the data of the previously selected reservoir.
    pub fn clear_dashboard(&mut self) {
        self.summary.set(None);
        self.history.set(Vec::new());
        self.chart.set(Vec::new());
    }
}
