//! Value types shared across the comparison engine.
//!
//! Everything here is an immutable value created fresh per call. Field names
//! on the serialized forms follow the JSON contract consumed by charting and
//! annotation layers (`U`, `pValue`, `rankBiserial`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two input samples an observation came from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    X,
    Y,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::X => f.write_str("x"),
            Group::Y => f.write_str("y"),
        }
    }
}

/// One value of the combined sample after ranking.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RankedObservation {
    pub value: f64,
    pub group: Group,
    /// 1-based position in the ascending combined sequence, or the mean of
    /// positions for members of a tie group.
    pub rank: f64,
}

/// Statistical regime that produced a p-value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestMethod {
    /// Exact null distribution of U (small, tie-free samples).
    Exact,
    /// Normal approximation with continuity correction.
    Normal,
    /// Normal approximation with continuity correction and tie-corrected variance.
    NormalTieCorrected,
}

impl TestMethod {
    pub fn label(&self) -> &'static str {
        match self {
            TestMethod::Exact => "exact",
            TestMethod::Normal => "normal approximation",
            TestMethod::NormalTieCorrected => "normal approximation, tie-corrected",
        }
    }
}

/// Magnitude bucket for |rank-biserial r|.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EffectMagnitude {
    /// |r| < 0.1
    Negligible,
    /// 0.1 <= |r| < 0.3
    Small,
    /// 0.3 <= |r| < 0.5
    Medium,
    /// |r| >= 0.5
    Large,
}

impl EffectMagnitude {
    pub fn label(&self) -> &'static str {
        match self {
            EffectMagnitude::Negligible => "negligible",
            EffectMagnitude::Small => "small",
            EffectMagnitude::Medium => "medium",
            EffectMagnitude::Large => "large",
        }
    }
}

/// Outcome of a two-sample Mann-Whitney U test.
///
/// Invariants: `u == u1.min(u2)` and `u1 + u2 == n1 * n2`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[serde(rename = "U")]
    pub u: f64,
    #[serde(rename = "U1")]
    pub u1: f64,
    #[serde(rename = "U2")]
    pub u2: f64,
    pub p_value: f64,
    pub method: TestMethod,
    /// Number of tie groups in the combined sample.
    pub tie_count: usize,
    pub rank_biserial: f64,
    pub effect_magnitude: EffectMagnitude,
    pub n1: usize,
    pub n2: usize,
    /// Continuity-corrected z-score; `None` when the exact method was used.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub z: Option<f64>,
}

/// Summary statistics for a single sample.
///
/// Invariants: `min <= q1 <= median <= q3 <= max` and `count == values.len()`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by n).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    /// The input sample, sorted ascending.
    pub values: Vec<f64>,
}
