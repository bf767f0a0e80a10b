//! Volume (hm³) compared with the planning targets, as an SVG line chart.

use dioxus::prelude::*;
use hds_core::geometry::{volume_axis_max, ChartGeometry};
use hds_core::models::ChartDataPoint;
use hds_utils::dates::{format_br, parse_history_date};

const AXIS_COLOR: &str = "#9ca3af";
const TICK_STYLE: &str = "font-size: 11px; fill: #6b7280;";

/// Axis label for a chart date: `dd/mm/yyyy` when readable, the raw text otherwise.
pub fn date_tick(raw: &str) -> String {
    parse_history_date(raw)
        .map(|d| format_br(&d))
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Props, Clone, PartialEq)]
pub struct VolumeChartProps {
    pub data: Vec<ChartDataPoint>,
}

#[component]
pub fn VolumeChart(props: VolumeChartProps) -> Element {
    let chart = ChartGeometry::default();
    let lines = chart.volume_chart(&props.data);
    let volume_max = format!("{:.0}", volume_axis_max(&props.data));
    let first_date = props.data.first().map(|p| date_tick(&p.date)).unwrap_or_default();
    let last_date = props.data.last().map(|p| date_tick(&p.date)).unwrap_or_default();
    let view_box = format!("0 0 {} {}", chart.width, chart.height);
    let (left, right) = (chart.margin_left, chart.plot_right());
    let (top, bottom) = (chart.margin_top, chart.plot_bottom());
    let tick_y = bottom + 16.0;
    let top_label_y = top + 10.0;
    let left_label_x = left - 4.0;
    let right_label_x = right + 4.0;

    rsx! {
        div {
            style: "padding: 16px; margin-bottom: 16px; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Volume (hm³) comparado com Metas" }
            if props.data.is_empty() {
                p { style: "margin: 0; color: #64748b;", "Sem dados de volume para este reservatório." }
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; font-size: 12px; margin-bottom: 4px;",
                    for line in lines.iter() {
                        span {
                            key: "{line.label}",
                            style: "display: inline-flex; align-items: center; gap: 4px; color: {line.color};",
                            span { style: "display: inline-block; width: 14px; height: 3px; background: {line.color};" }
                            "{line.label}"
                        }
                    }
                }
                svg {
                    width: "100%",
                    view_box: "{view_box}",
                    line { x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}", stroke: AXIS_COLOR }
                    line { x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}", stroke: AXIS_COLOR }
                    line { x1: "{right}", y1: "{top}", x2: "{right}", y2: "{bottom}", stroke: AXIS_COLOR }
                    for line in lines.into_iter() {
                        polyline {
                            key: "{line.label}",
                            points: "{line.points}",
                            fill: "none",
                            stroke: line.color,
                            stroke_width: "{line.stroke_width}",
                            stroke_dasharray: line.dasharray,
                        }
                    }
                    text { x: "{left_label_x}", y: "{top_label_y}", text_anchor: "end", style: TICK_STYLE, "{volume_max}" }
                    text { x: "{left_label_x}", y: "{bottom}", text_anchor: "end", style: TICK_STYLE, "0" }
                    text { x: "{right_label_x}", y: "{top_label_y}", style: TICK_STYLE, "100%" }
                    text { x: "{right_label_x}", y: "{bottom}", style: TICK_STYLE, "0%" }
                    text { x: "{left}", y: "{tick_y}", style: TICK_STYLE, "{first_date}" }
                    text { x: "{right}", y: "{tick_y}", text_anchor: "end", style: TICK_STYLE, "{last_date}" }
                }
            }
        }
    }
}
