//! Exact null distribution of the Mann-Whitney U statistic.
//!
//! For `i` X-labels and `j` Y-labels the number of orderings with U = u
//! satisfies
//!
//! ```text
//! f(i, j, u) = f(i - 1, j, u - j) + f(i, j - 1, u)
//! f(0, 0, 0) = 1
//! ```
//!
//! (the largest observation is either an X, which beats all `j` Y's, or a Y,
//! which beats nothing). The recurrence only ever lowers `u`, so P(U <= u_obs)
//! needs the table over `u in 0..=u_obs` and nothing above it. The table is
//! filled once, bottom-up, and shared by every `u` in the cumulative sum.

/// Largest per-group size for which the exact distribution is used.
pub const EXACT_MAX_N: usize = 20;

/// Binomial coefficient C(n, k), computed iteratively in floating point and
/// rounded: `result = result * (n - i) / (i + 1)` for `i in 0..k`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0_f64;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result.round()
}

/// Counts of label orderings with U = u for `u in 0..=max_u`, given `n1`
/// X-labels and `n2` Y-labels.
fn count_orderings(n1: usize, n2: usize, max_u: usize) -> Vec<u64> {
    let width = max_u + 1;
    let idx = |i: usize, j: usize, u: usize| (i * (n2 + 1) + j) * width + u;
    let mut table = vec![0u64; (n1 + 1) * (n2 + 1) * width];
    table[idx(0, 0, 0)] = 1;

    for i in 0..=n1 {
        for j in 0..=n2 {
            if i == 0 && j == 0 {
                continue;
            }
            for u in 0..=max_u {
                let mut ways = 0;
                if i > 0 && u >= j {
                    ways += table[idx(i - 1, j, u - j)];
                }
                if j > 0 {
                    ways += table[idx(i, j - 1, u)];
                }
                table[idx(i, j, u)] = ways;
            }
        }
    }

    (0..=max_u).map(|u| table[idx(n1, n2, u)]).collect()
}

/// One-tailed P(U <= u_obs) under the null hypothesis.
///
/// Returns `None` outside the exact method's domain: an empty group or a
/// group larger than [`EXACT_MAX_N`].
pub fn exact_cdf(n1: usize, n2: usize, u_obs: usize) -> Option<f64> {
    if n1 == 0 || n2 == 0 || n1 > EXACT_MAX_N || n2 > EXACT_MAX_N {
        return None;
    }
    let u_obs = u_obs.min(n1 * n2);
    let favourable: u64 = count_orderings(n1, n2, u_obs).iter().sum();
    let total = binomial(n1 + n2, n1);
    Some((favourable as f64 / total).clamp(0.0, 1.0))
}

/// Two-tailed exact p-value `min(1, 2 * P(U <= u_obs))`.
pub fn exact_p_value(n1: usize, n2: usize, u_obs: usize) -> Option<f64> {
    exact_cdf(n1, n2, u_obs).map(|p| (2.0 * p).min(1.0))
}
