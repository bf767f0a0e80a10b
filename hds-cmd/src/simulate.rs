//! Remote simulation run with failed-month report and CSV export.

use anyhow::Context;
use hds_core::client::ApiClient;
use hds_core::simulation::{failed_months, write_results_csv, SimulationRequest};
use hds_utils::dates::month_label_br;
use log::info;
use std::fs::File;

pub async fn run_simulate(
    api_base_url: &str,
    request_path: &str,
    demand_m3s: f64,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(request_path)
        .with_context(|| format!("failed to read {}", request_path))?;
    let request: SimulationRequest =
        serde_json::from_str(&body).context("invalid simulation request")?;

    let client = ApiClient::new(api_base_url)?;
    let response = client.run_simulation(&request).await?;
    info!(
        "Simulation returned {} months for reservoir {}",
        response.resultados.len(),
        request.reservatorio_id
    );

    println!("Volume final: {:.3} hm³", response.volume_final);
    println!(
        "Frequência de falha: {:.1}% dos meses",
        response.frequencia_nao_atendida
    );

    let failed = failed_months(&response, demand_m3s);
    if failed.is_empty() {
        println!("Demanda atendida integralmente (100%).");
    } else {
        println!("Demanda não atendida em {} meses:", failed.len());
        for point in failed {
            let label = point
                .month()
                .map(|m| month_label_br(&m))
                .unwrap_or_else(|| point.data.clone());
            println!("  {:<10} retirada {:.3} hm³", label, point.retirada_hm3);
        }
    }

    if let Some(path) = csv_path {
        let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
        write_results_csv(file, &response)?;
        info!("Results written to {}", path);
    }
    Ok(())
}
