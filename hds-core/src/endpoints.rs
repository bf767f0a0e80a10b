//! REST paths of the backend and its error-body convention.
//!
//! Shared by the native `client` and the browser fetch bridge so both speak
//! the same contract.

use serde::Deserialize;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "HDS_API_BASE_URL";

pub const RESERVOIRS: &str = "/reservatorios";
pub const SIMULATION_RUN: &str = "/simulacao/run";

pub fn dashboard_summary(id: i64) -> String {
    format!("/reservatorios/{}/dashboard/summary", id)
}

pub fn history(id: i64) -> String {
    format!("/reservatorios/{}/history", id)
}

pub fn volume_chart(id: i64) -> String {
    format!("/reservatorios/{}/dashboard/volume-chart", id)
}

/// Join a base URL and an endpoint path, tolerating a trailing slash on the base.
pub fn join(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Error message for a failed response: the backend's own `{"error": "..."}`
/// text when present, otherwise the HTTP status.
pub fn api_error_message(status: u16, reason: &str, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error: Some(msg) }) if !msg.is_empty() => msg,
        _ => format!("Erro na API: {} {}", status, reason)
            .trim_end()
            .to_string(),
    }
}
