use super::exact::{exact_p_value, EXACT_MAX_N};
use super::ranking::{assign_tied_ranks, RankedSample};
use crate::error::{ensure_finite, RanksumError, Result};
use crate::normal::normal_cdf;
use crate::types::{EffectMagnitude, Group, TestMethod, TestResult};

// ── Mann-Whitney U Test ─────────────────────────────────────────────

/// Two-sided Mann-Whitney U test (Wilcoxon rank-sum) for independent samples.
///
/// 1. Combine and rank all observations, averaging ranks over ties.
/// 2. U1 = R1 − n1(n1+1)/2, U2 = n1·n2 − U1, U = min(U1, U2).
/// 3. Exact null distribution when both groups have at most 20 observations
///    and there are no ties; otherwise the continuity-corrected normal
///    approximation, with tie-corrected variance when ties are present.
/// 4. Rank-biserial r = 1 − 2U/(n1·n2) from the U1 orientation, so swapping
///    `x` and `y` negates r and leaves U unchanged.
///
/// Errors on an empty sample or on any non-finite value.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<TestResult> {
    let n1 = x.len();
    let n2 = y.len();
    if n1 == 0 {
        return Err(RanksumError::InsufficientSample {
            group: Group::X,
            len: 0,
        });
    }
    if n2 == 0 {
        return Err(RanksumError::InsufficientSample {
            group: Group::Y,
            len: 0,
        });
    }
    ensure_finite(x, Group::X)?;
    ensure_finite(y, Group::Y)?;

    let ranked = assign_tied_ranks(x, y);
    let n1f = n1 as f64;
    let n2f = n2 as f64;

    let r1 = ranked.rank_sum(Group::X);
    let u1 = r1 - n1f * (n1f + 1.0) / 2.0;
    let u2 = n1f * n2f - u1;
    let u = u1.min(u2);

    let method = select_method(n1, n2, &ranked);
    tracing::debug!(
        n1,
        n2,
        tie_groups = ranked.tie_groups.len(),
        method = method.label(),
        "mann-whitney method selected"
    );

    let (p_value, z) = match method {
        TestMethod::Exact => match exact_p_value(n1, n2, u.round() as usize) {
            Some(p) => (p, None),
            None => {
                // select_method only picks Exact inside the exact domain
                let z = normal_z(u, n1, n2, &ranked);
                (two_tailed_normal_p(z), Some(z))
            }
        },
        TestMethod::Normal | TestMethod::NormalTieCorrected => {
            let z = normal_z(u, n1, n2, &ranked);
            (two_tailed_normal_p(z), Some(z))
        }
    };

    let rank_biserial = rank_biserial(u1, n1, n2);

    Ok(TestResult {
        u,
        u1,
        u2,
        p_value: p_value.clamp(0.0, 1.0),
        method,
        tie_count: ranked.tie_groups.len(),
        rank_biserial,
        effect_magnitude: classify_effect(rank_biserial),
        n1,
        n2,
        z,
    })
}

/// Exact only for small, tie-free samples.
fn select_method(n1: usize, n2: usize, ranked: &RankedSample) -> TestMethod {
    let has_ties = !ranked.tie_groups.is_empty();
    if n1 <= EXACT_MAX_N && n2 <= EXACT_MAX_N && !has_ties {
        TestMethod::Exact
    } else if has_ties {
        TestMethod::NormalTieCorrected
    } else {
        TestMethod::Normal
    }
}

/// Continuity-corrected z = (|U − μ| − 0.5) / σ with
/// σ² = n1·n2·(n+1)/12 − n1·n2·T / (12·n·(n−1)), T = Σ(t³ − t).
/// Returns 0 when σ is not positive.
fn normal_z(u: f64, n1: usize, n2: usize, ranked: &RankedSample) -> f64 {
    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let n = n1f + n2f;

    let mu = n1f * n2f / 2.0;
    let tie_term = ranked.tie_correction();
    let mut variance = n1f * n2f * (n + 1.0) / 12.0;
    if tie_term > 0.0 {
        variance -= n1f * n2f * tie_term / (12.0 * n * (n - 1.0));
    }

    if variance > 0.0 {
        ((u - mu).abs() - 0.5) / variance.sqrt()
    } else {
        0.0
    }
}

fn two_tailed_normal_p(z: f64) -> f64 {
    (2.0 * (1.0 - normal_cdf(z))).clamp(0.0, 1.0)
}

/// r = 1 − 2·U1/(n1·n2). Positive when `x` tends to be smaller than `y`.
fn rank_biserial(u1: f64, n1: usize, n2: usize) -> f64 {
    (1.0 - 2.0 * u1 / (n1 * n2) as f64).clamp(-1.0, 1.0)
}

/// Fixed thresholds on |r|: 0.5 large, 0.3 medium, 0.1 small.
pub fn classify_effect(r: f64) -> EffectMagnitude {
    let r = r.abs();
    if r >= 0.5 {
        EffectMagnitude::Large
    } else if r >= 0.3 {
        EffectMagnitude::Medium
    } else if r >= 0.1 {
        EffectMagnitude::Small
    } else {
        EffectMagnitude::Negligible
    }
}
