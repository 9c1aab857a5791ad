//! # ranksum
//!
//! Nonparametric two-sample comparison: the Mann-Whitney U test with an
//! exact null distribution for small tie-free samples and a tie-corrected,
//! continuity-corrected normal approximation otherwise, plus rank-biserial
//! effect sizes, descriptive statistics and display helpers.
//!
//! All functions are pure and allocate their own working state, so they are
//! safe to call concurrently.
//!
//! ```
//! use ranksum::{mann_whitney_u, TestMethod};
//!
//! let r = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(r.u, 0.0);
//! assert_eq!(r.method, TestMethod::Exact);
//! assert!((r.p_value - 0.1).abs() < 1e-12);
//! ```

pub mod compare;
pub mod config;
pub mod descriptive;
pub mod error;
pub mod format;
pub mod normal;
pub mod types;

pub use compare::{compare_samples, mann_whitney_u, Comparison};
pub use config::ComparisonConfig;
pub use descriptive::descriptive_stats;
pub use error::{RanksumError, Result};
pub use format::{effect_size_severity, format_p_value, significance_stars, summarize, Severity};
pub use normal::normal_cdf;
pub use types::{
    DescriptiveStats, EffectMagnitude, Group, RankedObservation, TestMethod, TestResult,
};
