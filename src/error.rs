use crate::types::Group;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RanksumError {
    #[error("Insufficient sample size: group {group} has {len} observations, need at least 1")]
    InsufficientSample { group: Group, len: usize },

    #[error("Non-finite value in group {group} at index {index}: {value}")]
    NonFiniteValue {
        group: Group,
        index: usize,
        value: f64,
    },

    #[error("Non-finite value at index {index}: {value}")]
    NonFiniteObservation { index: usize, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, RanksumError>;

impl From<std::io::Error> for RanksumError {
    fn from(e: std::io::Error) -> Self {
        RanksumError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RanksumError {
    fn from(e: serde_json::Error) -> Self {
        RanksumError::Json(e.to_string())
    }
}

fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
}

/// Rejects NaN and ±Infinity in one group of a two-sample test, reporting the
/// first offending position.
pub(crate) fn ensure_finite(values: &[f64], group: Group) -> Result<()> {
    match first_non_finite(values) {
        Some((index, value)) => Err(RanksumError::NonFiniteValue {
            group,
            index,
            value,
        }),
        None => Ok(()),
    }
}

/// Single-sample counterpart of [`ensure_finite`]; the error names no group.
pub(crate) fn ensure_finite_sample(values: &[f64]) -> Result<()> {
    match first_non_finite(values) {
        Some((index, value)) => Err(RanksumError::NonFiniteObservation { index, value }),
        None => Ok(()),
    }
}
