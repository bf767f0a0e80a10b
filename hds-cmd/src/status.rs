//! Drought status report for one reservoir.

use crate::reference_day;
use chrono::NaiveDate;
use hds_core::client::ApiClient;
use hds_core::drought_state::DroughtState;
use hds_core::gauge::{band_thresholds, GaugeBands};
use hds_core::models::{latest_thresholds, recent_history, Dashboard, RECENT_HISTORY_LEN};
use hds_core::state_duration::{resolve_state_duration, StateDuration};
use log::info;

/// Gauge and time-in-state for a fetched dashboard.
pub fn summarize(dashboard: &Dashboard, today: NaiveDate) -> (GaugeBands, StateDuration) {
    let thresholds = latest_thresholds(&dashboard.chart);
    let gauge = band_thresholds(thresholds.as_ref(), dashboard.summary.volume_percentual);

    let mut duration = resolve_state_duration(&dashboard.history, today);
    if duration.is_empty() {
        // no history: fall back to the server-side count
        duration.current_label = dashboard.summary.estado_atual_seca.clone();
        duration.days_in_state = dashboard.summary.dias_desde_ultima_mudanca;
    }
    (gauge, duration)
}

pub async fn run_status(
    api_base_url: &str,
    reservoir_id: i64,
    today: Option<&str>,
) -> anyhow::Result<()> {
    let today = reference_day(today)?;
    let client = ApiClient::new(api_base_url)?;
    info!("Fetching dashboard for reservoir {}", reservoir_id);
    let dashboard = client.get_dashboard(reservoir_id).await?;
    let (gauge, duration) = summarize(&dashboard, today);
    let summary = &dashboard.summary;

    println!("Volume atual: {:.2} hm³ ({:.1}%)", summary.volume_atual_hm3, gauge.needle);
    println!(
        "Estado de seca: {} [{:?}]",
        summary.estado_atual_seca,
        DroughtState::from_label(&summary.estado_atual_seca)
    );
    let [b1, b2, b3] = gauge.boundaries;
    println!(
        "Faixas: crítico < {:.1}% <= seca < {:.1}% <= alerta < {:.1}% <= conforto",
        b1, b2, b3
    );
    println!("Agulha na faixa: {}", gauge.needle_severity().label());
    println!("Tempo no estado: {}", duration.display());
    println!("Medidas ativas: {}", summary.medidas_recomendadas.len());

    let recent = recent_history(&dashboard.history, RECENT_HISTORY_LEN);
    if !recent.is_empty() {
        println!("Histórico recente:");
        for entry in recent {
            let volume = entry
                .volume_hm3
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string());
            println!("  {:<12} {:<14} {:>10}", entry.date, entry.state_label, volume);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hds_core::gauge::Severity;
    use hds_core::models::{ChartDataPoint, DashboardSummary, HistoryEntry};
    use hds_core::units::Fraction;

    fn dashboard(history: Vec<HistoryEntry>) -> Dashboard {
        Dashboard {
            summary: DashboardSummary {
                volume_atual_hm3: 42.0,
                volume_percentual: 35.0,
                estado_atual_seca: "Seca".to_string(),
                data_ultima_medicao: "2024-04-10".to_string(),
                dias_desde_ultima_mudanca: 12,
                medidas_recomendadas: Vec::new(),
            },
            history,
            chart: vec![ChartDataPoint {
                date: "2024-04-10".to_string(),
                volume: 42.0,
                meta1: Fraction(0.5),
                meta2: Fraction(0.25),
                meta3: Fraction(0.75),
            }],
        }
    }

    #[test]
    fn test_summarize_uses_chart_targets_and_history() {
        let history = vec![
            HistoryEntry::new("01/04/2024", "Alerta"),
            HistoryEntry::new("05/04/2024", "Seca"),
            HistoryEntry::new("10/04/2024", "Seca"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let (gauge, duration) = summarize(&dashboard(history), today);
        assert_eq!(gauge.boundaries, [25.0, 50.0, 75.0]);
        assert_eq!(gauge.needle_severity(), Severity::Drought);
        assert_eq!(duration.display(), "5 dias desde 05/04/2024");
    }

    #[test]
    fn test_summarize_falls_back_to_server_count() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let (_, duration) = summarize(&dashboard(Vec::new()), today);
        assert_eq!(duration.current_label, "Seca");
        assert_eq!(duration.days_in_state, 12);
        assert_eq!(duration.display(), "12 dias");
    }
}
