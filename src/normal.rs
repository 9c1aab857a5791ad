// ── Standard Normal Distribution (A&S 26.2.17 with Horner's method) ──

const INV_SQRT_2PI: f64 = 0.3989422804014327; // 1/sqrt(2*pi)

/// Computes P(Z > z) for the standard normal distribution.
/// Uses Abramowitz & Stegun 26.2.17 rational approximation with Horner's method.
/// Maximum absolute error is about 7.5e-8.
/// Caller must pass z >= 0 (use z.abs() before calling).
pub fn normal_sf(z: f64) -> f64 {
    debug_assert!(z >= 0.0, "normal_sf requires z >= 0, got {}", z);

    let t = 1.0 / (1.0 + 0.2316419 * z);
    let p = INV_SQRT_2PI * (-z * z / 2.0).exp();

    // Horner's method for the polynomial
    let poly = t
        * (0.319381530
            + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));

    p * poly
}

/// Standard normal cumulative distribution function Φ(z), clamped to [0, 1].
///
/// Negative arguments are reflected so that Φ(-z) = 1 - Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    let cdf = if z >= 0.0 {
        1.0 - normal_sf(z)
    } else {
        normal_sf(-z)
    };
    cdf.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Normal SF ───────────────────────────────────────────────────

    #[test]
    fn upper_tail_matches_reference_values() {
        // Q(z) = 1 − Φ(z) to 9 significant digits
        let table = [
            (0.0, 0.5),
            (1.0, 0.158655254),
            (2.5, 0.006209665),
            (4.0, 0.000031671242),
        ];
        for (z, expected) in table {
            let sf = normal_sf(z);
            assert!(
                (sf - expected).abs() < 2e-7,
                "Q({}) = {}, expected {}",
                z,
                sf,
                expected
            );
        }
    }

    #[test]
    fn upper_tail_decreases_with_z() {
        let mut prev = normal_sf(0.0);
        for step in 1..=60 {
            let sf = normal_sf(step as f64 * 0.1);
            assert!(sf < prev, "z={}", step as f64 * 0.1);
            prev = sf;
        }
    }

    // ── Normal CDF ──────────────────────────────────────────────────

    #[test]
    fn normal_cdf_at_zero_is_one_half() {
        let cdf = normal_cdf(0.0);
        assert!((cdf - 0.5).abs() < 1e-6, "cdf={}", cdf);
    }

    #[test]
    fn normal_cdf_matches_reference_table() {
        // Φ(z) to 7 decimals
        let table = [
            (0.5, 0.6914625),
            (1.0, 0.8413447),
            (1.645, 0.9500150),
            (2.0, 0.9772499),
            (3.0, 0.9986501),
        ];
        for (z, expected) in table {
            let cdf = normal_cdf(z);
            assert!(
                (cdf - expected).abs() < 1e-6,
                "Φ({}) = {}, expected {}",
                z,
                cdf,
                expected
            );
        }
    }

    #[test]
    fn normal_cdf_is_symmetric() {
        for z in [0.1, 0.75, 1.3, 2.2, 4.0] {
            let lhs = normal_cdf(-z);
            let rhs = 1.0 - normal_cdf(z);
            assert!((lhs - rhs).abs() < 1e-12, "z={} lhs={} rhs={}", z, lhs, rhs);
        }
    }

    #[test]
    fn normal_cdf_stays_in_unit_interval_at_extremes() {
        assert!(normal_cdf(40.0) <= 1.0);
        assert!(normal_cdf(-40.0) >= 0.0);
        assert!((normal_cdf(40.0) - 1.0).abs() < 1e-12);
        assert!(normal_cdf(-40.0) < 1e-12);
    }
}
