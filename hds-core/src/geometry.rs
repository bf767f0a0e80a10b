//! Arc geometry for drawing the semicircular gauge as SVG paths, and the
//! plot-area mapping of the volume-versus-targets line chart.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in SVG
//! screen coordinates (y grows downwards), so the default 180° start sits at
//! nine o'clock and a 180° sweep ends at three o'clock through twelve.

use crate::gauge::{GaugeBands, Severity, GAUGE_MAX, GAUGE_MIN};
use crate::models::ChartDataPoint;
use crate::units::{Fraction, Percentage};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Placement of the gauge dial inside its SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            radius: 80.0,
            stroke_width: 25.0,
            start_angle: 180.0,
            sweep: 180.0,
        }
    }
}

/// A band ready to be painted: its SVG path and stroke color.
#[derive(Debug, Clone, PartialEq)]
pub struct BandArc {
    pub severity: Severity,
    pub path: String,
    pub color: &'static str,
}

impl GaugeGeometry {
    /// Map a percentage onto the dial, linearly across [0, 100].
    pub fn value_to_angle(&self, value: f64) -> f64 {
        let value = if value.is_nan() {
            GAUGE_MIN
        } else {
            value.clamp(GAUGE_MIN, GAUGE_MAX)
        };
        self.start_angle + (value / GAUGE_MAX) * self.sweep
    }

    /// Arc path for the value interval `[from, to]`.
    pub fn arc_for(&self, from: f64, to: f64) -> String {
        describe_arc(
            self.cx,
            self.cy,
            self.radius,
            self.value_to_angle(from),
            self.value_to_angle(to),
        )
    }

    /// One arc per band, in paint order (calmest first, most severe last).
    pub fn arcs(&self, gauge: &GaugeBands) -> Vec<BandArc> {
        gauge
            .draw_order()
            .iter()
            .map(|band| BandArc {
                severity: band.severity,
                path: self.arc_for(band.start, band.end),
                color: band.severity.color(),
            })
            .collect()
    }

    /// Rotation of the needle, in degrees, for an SVG `rotate(...)` transform.
    pub fn needle_angle(&self, gauge: &GaugeBands) -> f64 {
        self.value_to_angle(gauge.needle)
    }
}

pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point {
        x: cx + radius * radians.cos(),
        y: cy + radius * radians.sin(),
    }
}

/// SVG path data for an arc from `start_angle` to `end_angle`.
///
/// Empty for a zero or negative sweep, which renders nothing.
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    if start_angle >= end_angle {
        return String::new();
    }
    let start = polar_to_cartesian(cx, cy, radius, end_angle);
    let end = polar_to_cartesian(cx, cy, radius, start_angle);
    let large_arc_flag = if end_angle - start_angle <= 180.0 { "0" } else { "1" };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        start.x, start.y, radius, radius, large_arc_flag, end.x, end.y
    )
}

/// Plot area of the volume chart inside its SVG viewport.
///
/// Volume (hm³) is scaled on the left axis from 0 to the largest observed
/// volume; the targets (%) on the right axis over the fixed 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            margin_left: 50.0,
            margin_right: 50.0,
            margin_top: 10.0,
            margin_bottom: 40.0,
        }
    }
}

/// One polyline of the volume chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: &'static str,
    pub color: &'static str,
    pub stroke_width: f64,
    /// SVG `stroke-dasharray`; `"none"` for a solid line.
    pub dasharray: &'static str,
    /// SVG `points` attribute, `"x,y x,y ..."`.
    pub points: String,
}

impl ChartGeometry {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    pub fn plot_bottom(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    pub fn plot_right(&self) -> f64 {
        self.margin_left + self.plot_width()
    }

    /// Horizontal position of the `index`-th of `count` evenly spaced points.
    /// A lone point sits in the middle.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margin_left + self.plot_width() / 2.0;
        }
        self.margin_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    /// Vertical position of `value` on an axis running from 0 to `max`.
    /// Out-of-range values are pinned to the plot edges.
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 && value.is_finite() {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.margin_top + self.plot_height() * (1.0 - ratio)
    }

    pub fn polyline(&self, values: &[f64], max: f64) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{},{}", self.x_at(i, values.len()), self.y_at(*v, max)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Volume plus the three targets, in delivery order, volume drawn first.
    pub fn volume_chart(&self, points: &[ChartDataPoint]) -> Vec<ChartLine> {
        let volume_max = volume_axis_max(points);
        let volumes: Vec<f64> = points.iter().map(|p| p.volume).collect();

        vec![
            ChartLine {
                label: "Volume",
                color: "#3f1d0f",
                stroke_width: 3.0,
                dasharray: "none",
                points: self.polyline(&volumes, volume_max),
            },
            ChartLine {
                label: "Meta 1",
                color: "#991b1b",
                stroke_width: 2.0,
                dasharray: "4 4",
                points: self.polyline(&target_percentages(points, |p| p.meta1), GAUGE_MAX),
            },
            ChartLine {
                label: "Meta 2",
                color: "#b45309",
                stroke_width: 2.0,
                dasharray: "4 4",
                points: self.polyline(&target_percentages(points, |p| p.meta2), GAUGE_MAX),
            },
            ChartLine {
                label: "Meta 3",
                color: "#ca8a04",
                stroke_width: 2.0,
                dasharray: "4 4",
                points: self.polyline(&target_percentages(points, |p| p.meta3), GAUGE_MAX),
            },
        ]
    }
}

fn target_percentages(points: &[ChartDataPoint], pick: fn(&ChartDataPoint) -> Fraction) -> Vec<f64> {
    points
        .iter()
        .map(|p| Percentage::from(pick(p)).finite_or_zero())
        .collect()
}

/// Top of the volume axis: the largest finite volume, or 1 for an empty or all-zero series.
pub fn volume_axis_max(points: &[ChartDataPoint]) -> f64 {
    let max = points
        .iter()
        .map(|p| p.volume)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}
