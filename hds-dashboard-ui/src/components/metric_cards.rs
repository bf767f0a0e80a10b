//! Headline cards of the drought-state dashboard.

use super::DroughtGauge;
use dioxus::prelude::*;
use hds_core::gauge::GaugeThresholds;
use hds_core::models::DashboardSummary;
use hds_core::state_duration::StateDuration;
use hds_utils::dates::format_br;

const CARD_STYLE: &str = "flex: 1 1 220px; padding: 16px; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px;";
const TITLE_STYLE: &str = "margin: 0 0 8px 0; font-size: 14px; font-weight: 500; color: #334155;";
const VALUE_STYLE: &str = "font-size: 24px; font-weight: bold;";
const NOTE_STYLE: &str = "margin: 4px 0 0 0; font-size: 12px; color: #64748b;";

/// Days shown on the "Tempo no Estado" card: the locally resolved duration,
/// or the backend's own count when the history gave nothing to scan.
pub fn days_in_state(summary: &DashboardSummary, duration: Option<&StateDuration>) -> u32 {
    match duration {
        Some(d) if !d.is_empty() => d.days_in_state,
        _ => summary.dias_desde_ultima_mudanca,
    }
}

/// "Desde ..." caption for the duration card.
pub fn since_caption(duration: Option<&StateDuration>) -> String {
    match duration {
        Some(d) if !d.is_empty() => match d.since_date {
            Some(date) => format!("Desde {}", format_br(&date)),
            None if !d.since.is_empty() => format!("Desde {}", d.since),
            None => "Data de início não disponível".to_string(),
        },
        _ => "Data de início não disponível".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardsProps {
    pub summary: DashboardSummary,
    #[props(!optional)]
    pub duration: Option<StateDuration>,
    #[props(!optional)]
    pub thresholds: Option<GaugeThresholds>,
}

#[component]
pub fn MetricCards(props: MetricCardsProps) -> Element {
    let summary = &props.summary;
    let days = days_in_state(summary, props.duration.as_ref());
    let since = since_caption(props.duration.as_ref());
    let measures = summary.medidas_recomendadas.len();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 16px;",
            div {
                style: CARD_STYLE,
                h4 { style: TITLE_STYLE, "Volume Atual (hm³)" }
                div { style: VALUE_STYLE, "{summary.volume_atual_hm3}" }
                p { style: NOTE_STYLE, "Última medição registrada: {summary.data_ultima_medicao}" }
            }
            div {
                style: CARD_STYLE,
                h4 { style: TITLE_STYLE, "Indicador de Severidade da Seca" }
                DroughtGauge {
                    percentage: summary.volume_percentual,
                    current_state: summary.estado_atual_seca.clone(),
                    thresholds: props.thresholds,
                }
            }
            div {
                style: CARD_STYLE,
                h4 { style: TITLE_STYLE, "Tempo no Estado" }
                div { style: VALUE_STYLE, "{days} dias" }
                p { style: NOTE_STYLE, "{since}" }
            }
            div {
                style: CARD_STYLE,
                h4 { style: TITLE_STYLE, "Medidas Ativas" }
                div { style: VALUE_STYLE, "{measures}" }
                p { style: NOTE_STYLE, "Recomendações em vigor" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(days: u32) -> DashboardSummary {
        DashboardSummary {
            volume_atual_hm3: 120.5,
            volume_percentual: 42.0,
            estado_atual_seca: "Alerta".to_string(),
            data_ultima_medicao: "2024-03-01".to_string(),
            dias_desde_ultima_mudanca: days,
            medidas_recomendadas: Vec::new(),
        }
    }

    #[test]
    fn test_days_prefers_resolved_duration() {
        let duration = StateDuration {
            current_label: "Alerta".to_string(),
            days_in_state: 17,
            since: "2024-02-13".to_string(),
            since_date: NaiveDate::from_ymd_opt(2024, 2, 13),
        };
        assert_eq!(days_in_state(&summary(90), Some(&duration)), 17);
        assert_eq!(since_caption(Some(&duration)), "Desde 13/02/2024");
    }

    #[test]
    fn test_days_falls_back_to_summary() {
        assert_eq!(days_in_state(&summary(90), None), 90);
        assert_eq!(
            days_in_state(&summary(90), Some(&StateDuration::default())),
            90
        );
        assert_eq!(since_caption(None), "Data de início não disponível");
    }

    #[test]
    fn test_since_caption_keeps_unparsed_date_text() {
        let duration = StateDuration {
            current_label: "Seca".to_string(),
            days_in_state: 0,
            since: "março de 2024".to_string(),
            since_date: None,
        };
        assert_eq!(since_caption(Some(&duration)), "Desde março de 2024");
    }
}
