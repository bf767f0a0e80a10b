//! Table of the most recent history entries.

use dioxus::prelude::*;
use hds_core::drought_state::DroughtState;
use hds_core::models::{recent_history, HistoryEntry, RECENT_HISTORY_LEN};

const CELL_STYLE: &str = "padding: 6px 8px; border-bottom: 1px solid #e2e8f0;";

/// Volume cell text; blank when the entry carries no volume.
pub fn volume_cell(entry: &HistoryEntry) -> String {
    entry
        .volume_hm3
        .map(|v| format!("{:.2}", v))
        .unwrap_or_default()
}

#[derive(Props, Clone, PartialEq)]
pub struct RecentHistoryTableProps {
    pub history: Vec<HistoryEntry>,
}

/// Newest-first view of the last few history records.
#[component]
pub fn RecentHistoryTable(props: RecentHistoryTableProps) -> Element {
    let rows: Vec<(&HistoryEntry, &'static str, String)> =
        recent_history(&props.history, RECENT_HISTORY_LEN)
            .into_iter()
            .map(|entry| {
                let color = DroughtState::from_label(&entry.state_label).text_color();
                (entry, color, volume_cell(entry))
            })
            .collect();

    rsx! {
        div {
            style: "padding: 16px; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px;",
            h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "Histórico Recente" }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #64748b;",
                "Os {RECENT_HISTORY_LEN} registros mais recentes do sistema."
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "{CELL_STYLE} text-align: left;", "Data" }
                        th { style: "{CELL_STYLE} text-align: left;", "Estado" }
                        th { style: "{CELL_STYLE} text-align: right;", "Volume (hm³)" }
                    }
                }
                tbody {
                    for (index, (entry, color, volume)) in rows.into_iter().enumerate() {
                        tr {
                            key: "{entry.date}-{index}",
                            td { style: CELL_STYLE, "{entry.date}" }
                            td {
                                style: CELL_STYLE,
                                span {
                                    style: "padding: 2px 8px; border: 1px solid #cbd5e1; border-radius: 9999px; color: {color};",
                                    "{entry.state_label}"
                                }
                            }
                            td { style: "{CELL_STYLE} text-align: right;", "{volume}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_cell() {
        let mut entry = HistoryEntry::new("2024-01-01", "Normal");
        assert_eq!(volume_cell(&entry), "");
        entry.volume_hm3 = Some(1234.5);
        assert_eq!(volume_cell(&entry), "1234.50");
    }
}
