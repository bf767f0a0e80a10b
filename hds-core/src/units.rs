use serde::{Deserialize, Serialize};

/// A share of reservoir capacity expressed as a fraction in [0, 1].
///
/// The backend delivers planning targets (`meta1`..`meta3`) in this unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fraction(pub f64);

/// A share of reservoir capacity expressed as a percentage in [0, 100].
///
/// This is the only unit the drought gauge accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl Percentage {
    /// The raw value, with NaN and infinities collapsed to 0.
    pub fn finite_or_zero(self) -> f64 {
        if self.0.is_finite() {
            self.0
        } else {
            0.0
        }
    }
}

impl From<Fraction> for Percentage {
    fn from(value: Fraction) -> Self {
        Percentage(value.0 * 100.0)
    }
}
