//! Presentation-adjacent helpers. Pure functions, no rendering dependency.

use crate::types::TestResult;
use serde::{Deserialize, Serialize};

/// Severity tier for colouring an effect size in a UI.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Neutral,
}

/// `"< 0.0001"` below 1e-4, four decimals below 1e-3, three decimals otherwise.
/// `None` (or NaN) renders as `"N/A"`.
pub fn format_p_value(p: Option<f64>) -> String {
    match p {
        None => "N/A".to_string(),
        Some(p) if p.is_nan() => "N/A".to_string(),
        Some(p) if p < 0.0001 => "< 0.0001".to_string(),
        Some(p) if p < 0.001 => format!("{:.4}", p),
        Some(p) => format!("{:.3}", p),
    }
}

/// Maps |r| to a severity tier: 0.5 high, 0.3 medium, 0.1 low.
pub fn effect_size_severity(r: f64) -> Severity {
    let r = r.abs();
    if r >= 0.5 {
        Severity::High
    } else if r >= 0.3 {
        Severity::Medium
    } else if r >= 0.1 {
        Severity::Low
    } else {
        Severity::Neutral
    }
}

pub fn significance_stars(p: f64) -> &'static str {
    if p < 0.001 {
        "***"
    } else if p < 0.01 {
        "**"
    } else if p < 0.05 {
        "*"
    } else {
        "ns"
    }
}

/// One-line human-readable summary of a test result.
///
/// `U = 0, p = 0.100 (exact), r = 1.00 (large effect), not significant at α = 0.05`
pub fn summarize(result: &TestResult, alpha: f64) -> String {
    let verdict = if result.p_value < alpha {
        "significant"
    } else {
        "not significant"
    };
    format!(
        "U = {}, p = {} ({}), r = {:.2} ({} effect), {} at α = {}",
        result.u,
        format_p_value(Some(result.p_value)),
        result.method.label(),
        result.rank_biserial,
        result.effect_magnitude.label(),
        verdict,
        alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EffectMagnitude, TestMethod};

    // ── format_p_value ──────────────────────────────────────────────

    #[test]
    fn tiny_p_is_bounded_string() {
        assert_eq!(format_p_value(Some(0.00001)), "< 0.0001");
        assert_eq!(format_p_value(Some(0.0)), "< 0.0001");
    }

    #[test]
    fn sub_millesimal_p_uses_four_decimals() {
        assert_eq!(format_p_value(Some(0.00042)), "0.0004");
        assert_eq!(format_p_value(Some(0.0001)), "0.0001");
    }

    #[test]
    fn ordinary_p_uses_three_decimals() {
        assert_eq!(format_p_value(Some(0.0123)), "0.012");
        assert_eq!(format_p_value(Some(0.1)), "0.100");
        assert_eq!(format_p_value(Some(1.0)), "1.000");
    }

    #[test]
    fn missing_p_is_na() {
        assert_eq!(format_p_value(None), "N/A");
        assert_eq!(format_p_value(Some(f64::NAN)), "N/A");
    }

    // ── Severity ────────────────────────────────────────────────────

    #[test]
    fn severity_tiers_use_absolute_value() {
        assert_eq!(effect_size_severity(0.75), Severity::High);
        assert_eq!(effect_size_severity(-0.5), Severity::High);
        assert_eq!(effect_size_severity(0.3), Severity::Medium);
        assert_eq!(effect_size_severity(-0.12), Severity::Low);
        assert_eq!(effect_size_severity(0.05), Severity::Neutral);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    // ── Summaries ───────────────────────────────────────────────────

    #[test]
    fn stars_follow_conventional_cutoffs() {
        assert_eq!(significance_stars(0.0005), "***");
        assert_eq!(significance_stars(0.005), "**");
        assert_eq!(significance_stars(0.03), "*");
        assert_eq!(significance_stars(0.05), "ns");
    }

    #[test]
    fn summary_line_reads_naturally() {
        let r = TestResult {
            u: 0.0,
            u1: 0.0,
            u2: 9.0,
            p_value: 0.1,
            method: TestMethod::Exact,
            tie_count: 0,
            rank_biserial: 1.0,
            effect_magnitude: EffectMagnitude::Large,
            n1: 3,
            n2: 3,
            z: None,
        };
        assert_eq!(
            summarize(&r, 0.05),
            "U = 0, p = 0.100 (exact), r = 1.00 (large effect), not significant at α = 0.05"
        );
        assert!(summarize(&r, 0.2).ends_with("significant at α = 0.2"));
    }
}
