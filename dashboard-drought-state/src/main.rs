//! Drought state ("Estado de Seca") dashboard.
//!
//! The user picks a reservoir; the page loads its dashboard summary, drought
//! history and volume chart from the backend and shows the volume, the
//! severity gauge, how long the reservoir has been in its current drought
//! state, the volume against its targets over time and the most recent
//! history records.
//!
//! Data flow:
//! 1. On mount, the reservoir list is fetched for the selector.
//! 2. Whenever the selection changes, summary, history and chart are fetched
//!    concurrently.
//! 3. Gauge thresholds come from the latest chart point; the state duration
//!    is resolved locally from the history against today's browser date.

use dioxus::prelude::*;
use hds_core::models::latest_thresholds;
use hds_core::state_duration::resolve_state_duration;
use hds_dashboard_ui::components::{
    DashboardHeader, EmptyReservoirState, ErrorDisplay, LoadingSpinner, MetricCards,
    RecentHistoryTable, ReservoirSelector, VolumeChart,
};
use hds_dashboard_ui::fetch;
use hds_dashboard_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("drought-state-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the reservoir list on mount
    use_effect(move || {
        spawn(async move {
            match fetch::get_reservoirs().await {
                Ok(reservoirs) => {
                    log::info!("{} reservoirs available", reservoirs.len());
                    state.reservoirs.set(reservoirs);
                }
                Err(e) => {
                    log::error!("Failed to load reservoirs: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Reload the dashboard whenever the selection changes
    use_effect(move || {
        let Some(id) = (state.selected_reservoir)() else {
            state.clear_dashboard();
            return;
        };
        state.loading.set(true);
        state.error_msg.set(None);
        spawn(async move {
            let result = fetch::get_dashboard(id).await;
            if *state.selected_reservoir.peek() != Some(id) {
                log::info!("discarding stale response for reservoir {}", id);
                return;
            }
            match result {
                Ok(dashboard) => {
                    log::info!(
                        "reservoir {}: {} history entries, {} chart points",
                        id,
                        dashboard.history.len(),
                        dashboard.chart.len()
                    );
                    state.summary.set(Some(dashboard.summary));
                    state.history.set(dashboard.history);
                    state.chart.set(dashboard.chart);
                }
                Err(e) => {
                    log::error!("Failed to load reservoir {}: {:#}", id, e);
                    state.clear_dashboard();
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let reservoir_name = state.selected_name().unwrap_or_default();
    let summary = (state.summary)();
    let history = state.history.read().clone();
    let chart = state.chart.read().clone();
    let thresholds = latest_thresholds(&chart);
    let duration = fetch::today().map(|today| resolve_state_duration(&history, today));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f8fafc;",

            DashboardHeader {
                title: "Estado de Seca".to_string(),
                reservoir_name: reservoir_name,
            }
            ReservoirSelector {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(summary) = summary {
                MetricCards {
                    summary: summary,
                    duration: duration,
                    thresholds: thresholds,
                }
                VolumeChart { data: chart }
                RecentHistoryTable { history: history }
            } else {
                EmptyReservoirState {}
            }
        }
    }
}
