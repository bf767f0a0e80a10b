//! Offline time-in-state resolution over a saved history payload.

use crate::reference_day;
use anyhow::Context;
use hds_core::models::HistoryEntry;
use hds_core::state_duration::resolve_state_duration;
use log::info;

/// Parse a history JSON array as returned by `GET /reservatorios/{id}/history`.
pub fn parse_history(json: &str) -> anyhow::Result<Vec<HistoryEntry>> {
    serde_json::from_str(json).context("history file is not a valid history payload")
}

pub fn run_duration(history_path: &str, today: Option<&str>) -> anyhow::Result<()> {
    let today = reference_day(today)?;
    let json = std::fs::read_to_string(history_path)
        .with_context(|| format!("failed to read {}", history_path))?;
    let history = parse_history(&json)?;
    info!("Loaded {} history entries from {}", history.len(), history_path);

    let duration = resolve_state_duration(&history, today);
    if duration.is_empty() {
        println!("Histórico vazio");
        return Ok(());
    }
    println!("Estado atual: {}", duration.current_label);
    println!("{}", duration.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_history;

    #[test]
    fn test_parse_history() {
        let json = r#"[{"Data": "01/01/2024", "Estado de Seca": "Alerta", "Volume (hm3)": 3.2}]"#;
        let history = parse_history(json).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].state_label, "Alerta");
    }

    #[test]
    fn test_parse_history_rejects_wrong_shape() {
        assert!(parse_history(r#"{"Data": "01/01/2024"}"#).is_err());
    }
}
