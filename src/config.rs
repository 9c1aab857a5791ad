use crate::error::{RanksumError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ALPHA_ENV: &str = "RANKSUM_ALPHA";

fn default_alpha() -> f64 {
    0.05
}

/// Caller-tunable knobs for a comparison. Effect-size thresholds and the
/// exact-method size limit are fixed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonConfig {
    /// Significance threshold for the `significant` flag and summaries.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(RanksumError::InvalidConfig(format!(
                "alpha must be in (0.0, 1.0) exclusive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Strict load: read and parse `path`, then validate.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ComparisonConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, falling back to defaults on any failure,
    /// then apply the `RANKSUM_ALPHA` override.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(
                        "Loaded comparison config from {}: alpha={}",
                        path.display(),
                        config.alpha
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load {}: {}, using defaults",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Some(path) => {
                tracing::warn!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_override();
        config
    }

    /// Replaces `alpha` with `RANKSUM_ALPHA` when it is set and lies in (0, 1).
    /// Unparsable or out-of-range values are logged and ignored.
    pub fn apply_env_override(&mut self) {
        if let Ok(raw) = std::env::var(ALPHA_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(alpha) if alpha > 0.0 && alpha < 1.0 => self.alpha = alpha,
                _ => tracing::warn!("Ignoring invalid {}={:?}", ALPHA_ENV, raw),
            }
        }
    }
}
