//! Semicircular drought-severity gauge.

use dioxus::prelude::*;
use hds_core::drought_state::DroughtState;
use hds_core::gauge::{band_thresholds, GaugeThresholds};
use hds_core::geometry::GaugeGeometry;

const NEEDLE_COLOR: &str = "#334155";

#[derive(Props, Clone, PartialEq)]
pub struct DroughtGaugeProps {
    /// Current stored volume, 0-100
    pub percentage: f64,
    /// Drought state label as reported by the backend
    pub current_state: String,
    /// Target percentages; the default 20/40/60 split is used when absent
    #[props(!optional)]
    pub thresholds: Option<GaugeThresholds>,
}

/// Four stacked severity arcs with a needle at the current volume.
#[component]
pub fn DroughtGauge(props: DroughtGaugeProps) -> Element {
    let geometry = GaugeGeometry::default();
    let gauge = band_thresholds(props.thresholds.as_ref(), props.percentage);
    let arcs = geometry.arcs(&gauge);
    let needle_angle = geometry.needle_angle(&gauge);
    let (cx, cy) = (geometry.cx, geometry.cy);
    let needle_tip = cx + geometry.radius - 5.0;
    let stroke_width = geometry.stroke_width;
    let value_label = format!("{:.1}%", gauge.needle);
    let state_color = DroughtState::from_label(&props.current_state).text_color();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; width: 100%;",
            svg {
                width: "240",
                height: "140",
                view_box: "0 20 200 120",
                style: "overflow: visible;",
                for arc in arcs.into_iter().filter(|a| !a.path.is_empty()) {
                    path {
                        key: "{arc.color}",
                        d: "{arc.path}",
                        fill: "none",
                        stroke: "{arc.color}",
                        stroke_width: "{stroke_width}",
                    }
                }
                g {
                    transform: "rotate({needle_angle} {cx} {cy})",
                    style: "transition: transform 1s cubic-bezier(0.4, 0, 0.2, 1);",
                    line {
                        x1: "{cx}",
                        y1: "{cy}",
                        x2: "{needle_tip}",
                        y2: "{cy}",
                        stroke: NEEDLE_COLOR,
                        stroke_width: "4",
                        stroke_linecap: "round",
                    }
                    circle { cx: "{cx}", cy: "{cy}", r: "6", fill: NEEDLE_COLOR }
                }
                text { x: "10", y: "110", font_size: "10", font_weight: "bold", fill: "#94a3b8", "0%" }
                text { x: "170", y: "110", font_size: "10", font_weight: "bold", fill: "#94a3b8", "100%" }
            }
            div {
                style: "margin-top: -20px; display: flex; flex-direction: column; align-items: center;",
                span {
                    style: "font-size: 28px; font-weight: 900; color: #1e293b;",
                    "{value_label}"
                }
                span {
                    style: "font-size: 13px; font-weight: 600; text-transform: uppercase; color: {state_color};",
                    "{props.current_state}"
                }
            }
        }
    }
}
