//! Simulation payloads and the client-side reading of their results.
//!
//! The water-balance simulation runs on the backend; this module only
//! describes its request/response shapes, flags months whose demand was not
//! met and exports results as CSV.

use chrono::NaiveDate;
use hds_utils::dates::{days_in_month, parse_year_month};
use serde::{Deserialize, Serialize};
use std::io::Write;

const SECONDS_PER_DAY: f64 = 86_400.0;
const M3_PER_HM3: f64 = 1e6;

/// Shortfall (hm³) above which a month counts as failed.
pub const FAILURE_TOLERANCE_HM3: f64 = 0.01;

/// Body of `POST /simulacao/run`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub reservatorio_id: i64,
    /// Initial stored volume in hm³.
    pub volume_inicial: f64,
    /// ISO date (YYYY-MM-DD).
    pub data_inicio: String,
    /// ISO date (YYYY-MM-DD).
    pub data_fim: String,
    pub usar_media_historica: bool,
    /// Either one value for every month or twelve monthly values, in m³/s.
    pub demandas_mensais: Vec<f64>,
}

/// One simulated month.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SimulationPoint {
    pub data: String,
    pub volume_hm3: f64,
    pub afluencia_hm3: f64,
    pub retirada_hm3: f64,
    pub evaporacao_hm3: f64,
    pub vertimento_hm3: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerta: Option<String>,
}

impl SimulationPoint {
    /// First day of the simulated month, when `data` is `YYYY-MM[-DD]`.
    pub fn month(&self) -> Option<NaiveDate> {
        parse_year_month(&self.data)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub resultados: Vec<SimulationPoint>,
    /// Share of months with unmet demand, in percent.
    pub frequencia_nao_atendida: f64,
    pub volume_final: f64,
}

/// Volume (hm³) a constant flow of `demand_m3s` draws over `days` days.
pub fn expected_monthly_demand_hm3(demand_m3s: f64, days: u32) -> f64 {
    demand_m3s * f64::from(days) * SECONDS_PER_DAY / M3_PER_HM3
}

/// Months in which the withdrawal fell short of a constant demand of `demand_m3s`.
///
/// Points whose date cannot be read are skipped.
pub fn failed_months(response: &SimulationResponse, demand_m3s: f64) -> Vec<&SimulationPoint> {
    response
        .resultados
        .iter()
        .filter(|point| match point.month() {
            Some(month) => {
                let expected = expected_monthly_demand_hm3(demand_m3s, days_in_month(&month));
                expected - point.retirada_hm3 > FAILURE_TOLERANCE_HM3
            }
            None => false,
        })
        .collect()
}

/// Write the complete result table as CSV.
pub fn write_results_csv<W: Write>(writer: W, response: &SimulationResponse) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Data",
        "Afluencia (hm3)",
        "Evaporacao (hm3)",
        "Retirada (hm3)",
        "Vertimento (hm3)",
        "Volume Inicial (hm3)",
    ])?;
    for point in &response.resultados {
        wtr.write_record([
            point.data.clone(),
            format!("{:.3}", point.afluencia_hm3),
            format!("{:.3}", point.evaporacao_hm3),
            format!("{:.3}", point.retirada_hm3),
            format!("{:.3}", point.vertimento_hm3),
            format!("{:.3}", point.volume_hm3),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(data: &str, retirada: f64) -> SimulationPoint {
        SimulationPoint {
            data: data.to_string(),
            volume_hm3: 100.0,
            afluencia_hm3: 5.0,
            retirada_hm3: retirada,
            evaporacao_hm3: 1.25,
            vertimento_hm3: 0.0,
            alerta: None,
        }
    }

    #[test]
    fn test_expected_monthly_demand() {
        // 1 m³/s over 30 days = 2.592 hm³
        assert!((expected_monthly_demand_hm3(1.0, 30) - 2.592).abs() < 1e-9);
    }

    #[test]
    fn test_failed_months() {
        let response = SimulationResponse {
            resultados: vec![
                point("2015-02", 2.4192),  // February, 28 days: fully met
                point("2015-03", 2.0),     // March needs 2.6784
                point("2015-04-01", 2.59), // April needs 2.592, within tolerance
                point("garbage", 0.0),
            ],
            frequencia_nao_atendida: 33.3,
            volume_final: 90.0,
        };
        let failed = failed_months(&response, 1.0);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].data, "2015-03");
    }

    #[test]
    fn test_write_results_csv() {
        let response = SimulationResponse {
            resultados: vec![point("2015-01", 1.0)],
            frequencia_nao_atendida: 0.0,
            volume_final: 100.0,
        };
        let mut buf: Vec<u8> = Vec::new();
        write_results_csv(&mut buf, &response).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Data,Afluencia (hm3),Evaporacao (hm3),Retirada (hm3),Vertimento (hm3),Volume Inicial (hm3)")
        );
        assert_eq!(lines.next(), Some("2015-01,5.000,1.250,1.000,0.000,100.000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_response_parses_optional_alert() {
        let json = r#"{
            "resultados": [
                {"data": "2016-01", "volume_hm3": 10.0, "afluencia_hm3": 0.5, "retirada_hm3": 1.0,
                 "evaporacao_hm3": 0.2, "vertimento_hm3": 0.0, "alerta": "Volume morto"}
            ],
            "frequencia_nao_atendida": 12.5,
            "volume_final": 9.3
        }"#;
        let response: SimulationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.resultados[0].alerta.as_deref(), Some("Volume morto"));
    }
}
