//! Async REST client for the hidrossistema backend.

use crate::endpoints::{self, api_error_message};
use crate::models::{ChartDataPoint, Dashboard, DashboardSummary, HistoryEntry, Reservoir};
use crate::simulation::{SimulationRequest, SimulationResponse};
use anyhow::Context;
use log::{info, warn};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        endpoints::join(&self.base_url, endpoint)
    }

    async fn check(response: Response) -> anyhow::Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &body,
        );
        warn!("{} -> {}", status, message);
        anyhow::bail!(message)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> anyhow::Result<T> {
        let url = self.url(endpoint);
        info!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("unexpected payload from {}", url))
    }

    pub async fn get_reservoirs(&self) -> anyhow::Result<Vec<Reservoir>> {
        self.get_json(endpoints::RESERVOIRS).await
    }

    pub async fn get_dashboard_summary(&self, id: i64) -> anyhow::Result<DashboardSummary> {
        self.get_json(&endpoints::dashboard_summary(id)).await
    }

    pub async fn get_history(&self, id: i64) -> anyhow::Result<Vec<HistoryEntry>> {
        self.get_json(&endpoints::history(id)).await
    }

    pub async fn get_volume_chart(&self, id: i64) -> anyhow::Result<Vec<ChartDataPoint>> {
        self.get_json(&endpoints::volume_chart(id)).await
    }

    /// Fetch summary, history and volume chart concurrently.
    pub async fn get_dashboard(&self, id: i64) -> anyhow::Result<Dashboard> {
        let (summary, history, chart) = tokio::try_join!(
            self.get_dashboard_summary(id),
            self.get_history(id),
            self.get_volume_chart(id),
        )?;
        info!(
            "reservoir {}: {} history entries, {} chart points",
            id,
            history.len(),
            chart.len()
        );
        Ok(Dashboard {
            summary,
            history,
            chart,
        })
    }

    pub async fn run_simulation(
        &self,
        request: &SimulationRequest,
    ) -> anyhow::Result<SimulationResponse> {
        let url = self.url(endpoints::SIMULATION_RUN);
        info!("POST {} (reservoir {})", url, request.reservatorio_id);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        let response = Self::check(response).await?;
        response
            .json::<SimulationResponse>()
            .await
            .context("unexpected simulation payload")
    }
}
