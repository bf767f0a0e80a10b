//! Drought severity gauge banding.
//!
//! Turns three unordered planning targets (`meta1`..`meta3`) and the current
//! fill percentage into four contiguous severity bands over [0, 100] plus a
//! needle position. Every input is normalized; nothing here can fail.

use crate::units::Percentage;
use serde::{Deserialize, Serialize};

/// Boundaries used when the delivered targets are all (near) zero.
pub const FALLBACK_BOUNDARIES: [f64; 3] = [20.0, 40.0, 60.0];

/// A target set whose largest value is at or below this is treated as missing.
pub const MISSING_THRESHOLD_EPSILON: f64 = 0.1;

/// Lower and upper ends of the gauge domain, in percent.
pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;

/// The three planning targets feeding the gauge, already in percent.
///
/// Absent fields deserialize as 0. No ordering between the three is assumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeThresholds {
    #[serde(default)]
    pub meta1: Percentage,
    #[serde(default)]
    pub meta2: Percentage,
    #[serde(default)]
    pub meta3: Percentage,
}

impl GaugeThresholds {
    pub fn new(meta1: f64, meta2: f64, meta3: f64) -> Self {
        Self {
            meta1: Percentage(meta1),
            meta2: Percentage(meta2),
            meta3: Percentage(meta3),
        }
    }
}

/// Severity identity of a gauge band, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Drought,
    Alert,
    Comfortable,
}

impl Severity {
    /// Bands in ascending value order (and descending severity).
    pub const ASCENDING: [Severity; 4] = [
        Severity::Critical,
        Severity::Drought,
        Severity::Alert,
        Severity::Comfortable,
    ];

    /// Stroke color of the band.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Critical => "#ef4444",
            Severity::Drought => "#f97316",
            Severity::Alert => "#eab308",
            Severity::Comfortable => "#22c55e",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Crítico",
            Severity::Drought => "Seca",
            Severity::Alert => "Alerta",
            Severity::Comfortable => "Conforto",
        }
    }
}

/// One band of the gauge: `[start, end)`, except the last band which is `[start, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityBand {
    pub severity: Severity,
    pub start: f64,
    pub end: f64,
}

impl SeverityBand {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    fn contains(&self, value: f64) -> bool {
        if self.severity == Severity::Comfortable {
            self.start <= value && value <= self.end
        } else {
            self.start <= value && value < self.end
        }
    }
}

/// The full, render-ready gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBands {
    /// Sorted boundaries `b1 <= b2 <= b3`, each within [0, 100].
    pub boundaries: [f64; 3],
    /// Critical, Drought, Alert, Comfortable, in that order.
    pub bands: [SeverityBand; 4],
    /// Current value clamped to [0, 100].
    pub needle: f64,
}

impl GaugeBands {
    /// Bands in the order they must be painted when stacked on a common
    /// origin: Comfortable first, Critical last, so the more severe color
    /// always ends up on top at a shared boundary.
    pub fn draw_order(&self) -> [SeverityBand; 4] {
        let [critical, drought, alert, comfortable] = self.bands;
        [comfortable, alert, drought, critical]
    }

    /// The severity of the band `value` falls into (clamped to the gauge domain).
    pub fn band_at(&self, value: f64) -> Severity {
        let value = clamp_percent(value);
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map(|band| band.severity)
            .unwrap_or(Severity::Comfortable)
    }

    /// The severity under the needle.
    pub fn needle_severity(&self) -> Severity {
        self.band_at(self.needle)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        GAUGE_MIN
    } else {
        value.clamp(GAUGE_MIN, GAUGE_MAX)
    }
}

/// Sort, repair and clamp the three targets into gauge boundaries.
pub fn sorted_boundaries(thresholds: Option<&GaugeThresholds>) -> [f64; 3] {
    let t = thresholds.copied().unwrap_or_default();
    let mut raw = [
        t.meta1.finite_or_zero(),
        t.meta2.finite_or_zero(),
        t.meta3.finite_or_zero(),
    ];
    // the producer gives no ordering guarantee between the three targets
    raw.sort_by(f64::total_cmp);

    let [mut b1, mut b2, mut b3] = raw;
    if b3 <= MISSING_THRESHOLD_EPSILON {
        [b1, b2, b3] = FALLBACK_BOUNDARIES;
    }

    b1 = b1.max(GAUGE_MIN);
    b2 = b2.max(b1);
    b3 = b3.max(b2);

    [b1.min(GAUGE_MAX), b2.min(GAUGE_MAX), b3.min(GAUGE_MAX)]
}

/// Build the four severity bands and the needle for a gauge.
pub fn band_thresholds(thresholds: Option<&GaugeThresholds>, current_value: f64) -> GaugeBands {
    let boundaries = sorted_boundaries(thresholds);
    let [b1, b2, b3] = boundaries;
    let edges = [GAUGE_MIN, b1, b2, b3, GAUGE_MAX];

    let bands = Severity::ASCENDING.map(|severity| {
        let i = severity as usize;
        SeverityBand {
            severity,
            start: edges[i],
            end: edges[i + 1],
        }
    });

    GaugeBands {
        boundaries,
        bands,
        needle: clamp_percent(current_value),
    }
}
