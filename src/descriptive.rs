use crate::error::{ensure_finite_sample, Result};
use crate::types::DescriptiveStats;

/// Count, mean, median, population standard deviation, extremes and
/// quartiles of a single sample.
///
/// Quartiles use the nearest-rank method: `q1 = sorted[floor(n * 0.25)]`,
/// `q3 = sorted[floor(n * 0.75)]`, with no interpolation between ranks.
///
/// Returns `Ok(None)` for an empty sample. Non-finite values are rejected.
pub fn descriptive_stats(values: &[f64]) -> Result<Option<DescriptiveStats>> {
    if values.is_empty() {
        return Ok(None);
    }
    ensure_finite_sample(values)?;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let q1 = sorted[nearest_rank(n, 0.25)];
    let q3 = sorted[nearest_rank(n, 0.75)];

    Ok(Some(DescriptiveStats {
        count: n,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        q1,
        q3,
        values: sorted,
    }))
}

/// Zero-based index `floor(n * fraction)`, kept inside the slice.
fn nearest_rank(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction).floor() as usize).min(n - 1)
}
