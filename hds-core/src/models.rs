//! Typed records for every backend payload the dashboard consumes.
//!
//! Field names on the wire vary between backend revisions (Portuguese keys,
//! spaces, unit suffixes with or without superscripts). All of that renaming
//! happens here, in serde attributes, and nowhere else.

use crate::gauge::GaugeThresholds;
use crate::units::Fraction;
use chrono::NaiveDate;
use hds_utils::dates::parse_history_date;
use serde::{Deserialize, Serialize};

/// Number of entries shown in the "recent history" table.
pub const RECENT_HISTORY_LEN: usize = 8;

/// A reservoir ("reservatório") as listed by `GET /reservatorios`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Reservoir {
    pub id: i64,
    pub nome: String,
    pub municipio: String,
    #[serde(default)]
    pub bacia: Option<String>,
    /// Capacity in cubic hectometres (hm³)
    #[serde(default)]
    pub capacidade_hm3: f64,
}

/// A mitigation measure recommended for the current drought state.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RecommendedMeasure {
    pub acao: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub responsaveis: String,
}

/// Payload of `GET /reservatorios/{id}/dashboard/summary`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub volume_atual_hm3: f64,
    /// Current fill level, in percent of capacity.
    pub volume_percentual: f64,
    pub estado_atual_seca: String,
    #[serde(default)]
    pub data_ultima_medicao: String,
    /// Server-side day count, used only when the history is unavailable.
    #[serde(default)]
    pub dias_desde_ultima_mudanca: u32,
    #[serde(default)]
    pub medidas_recomendadas: Vec<RecommendedMeasure>,
}

/// One observation of `GET /reservatorios/{id}/history`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Raw date string, either `dd/mm/yyyy` or ISO.
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Estado de Seca")]
    pub state_label: String,
    #[serde(
        rename = "Volume (hm3)",
        alias = "Volume (Hm³)",
        alias = "Volume (hm³)",
        default
    )]
    pub volume_hm3: Option<f64>,
    #[serde(rename = "Volume (%)", default, skip_serializing_if = "Option::is_none")]
    pub volume_percent: Option<f64>,
}

impl HistoryEntry {
    pub fn new(date: &str, state_label: &str) -> Self {
        Self {
            date: date.to_string(),
            state_label: state_label.to_string(),
            volume_hm3: None,
            volume_percent: None,
        }
    }

    /// The observation date, if the raw string is a valid date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_history_date(&self.date)
    }
}

/// One point of `GET /reservatorios/{id}/dashboard/volume-chart`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ChartDataPoint {
    #[serde(rename = "Data")]
    pub date: String,
    /// Stored volume in hm³.
    pub volume: f64,
    #[serde(default)]
    pub meta1: Fraction,
    #[serde(default)]
    pub meta2: Fraction,
    #[serde(default)]
    pub meta3: Fraction,
}

impl ChartDataPoint {
    /// The planning targets of this point, converted to percent for the gauge.
    pub fn thresholds(&self) -> GaugeThresholds {
        GaugeThresholds {
            meta1: self.meta1.into(),
            meta2: self.meta2.into(),
            meta3: self.meta3.into(),
        }
    }
}

/// Everything the drought-state page shows for one reservoir.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub history: Vec<HistoryEntry>,
    pub chart: Vec<ChartDataPoint>,
}

/// Targets of the most recent chart point; `None` for an empty chart.
pub fn latest_thresholds(points: &[ChartDataPoint]) -> Option<GaugeThresholds> {
    points
        .iter()
        .enumerate()
        .max_by_key(|(i, point)| (parse_history_date(&point.date), *i))
        .map(|(_, point)| point.thresholds())
}

/// The `n` most recent history entries, newest first.
///
/// Ordering uses the parsed dates; entries sharing a date (or lacking one)
/// keep their delivery order, later deliveries counting as more recent.
pub fn recent_history(history: &[HistoryEntry], n: usize) -> Vec<&HistoryEntry> {
    let mut entries: Vec<(usize, Option<NaiveDate>, &HistoryEntry)> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| (i, entry.parsed_date(), entry))
        .collect();
    entries.sort_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));
    entries.into_iter().take(n).map(|(_, _, entry)| entry).collect()
}
