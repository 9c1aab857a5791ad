//! Two-sample rank comparison: tie-aware ranking, the exact U distribution,
//! and the Mann-Whitney U test that selects between exact and normal
//! p-values.

pub mod exact;
pub mod mann_whitney;
pub mod ranking;

pub use exact::{binomial, exact_cdf, exact_p_value, EXACT_MAX_N};
pub use mann_whitney::{classify_effect, mann_whitney_u};
pub use ranking::{assign_tied_ranks, RankedSample};

use crate::config::ComparisonConfig;
use crate::descriptive::descriptive_stats;
use crate::error::{RanksumError, Result};
use crate::format::summarize;
use crate::types::{DescriptiveStats, Group, TestResult};
use serde::{Deserialize, Serialize};

/// Everything a chart annotation needs about one x-vs-y comparison.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub test: TestResult,
    pub x: DescriptiveStats,
    pub y: DescriptiveStats,
    /// `test.p_value < alpha`
    pub significant: bool,
    pub summary: String,
}

/// Runs the U test and describes both samples under one config.
pub fn compare_samples(x: &[f64], y: &[f64], config: &ComparisonConfig) -> Result<Comparison> {
    config.validate()?;
    let test = mann_whitney_u(x, y)?;

    // mann_whitney_u already rejected empty and non-finite samples
    let x_stats = descriptive_stats(x)?.ok_or(RanksumError::InsufficientSample {
        group: Group::X,
        len: 0,
    })?;
    let y_stats = descriptive_stats(y)?.ok_or(RanksumError::InsufficientSample {
        group: Group::Y,
        len: 0,
    })?;

    let significant = test.p_value < config.alpha;
    let summary = summarize(&test, config.alpha);

    Ok(Comparison {
        test,
        x: x_stats,
        y: y_stats,
        significant,
        summary,
    })
}
