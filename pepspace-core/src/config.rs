use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BUDGET_FACTOR, DEFAULT_COUNT, DEFAULT_PRESENTATION_CEILING};

///
/// Query limits and defaults, usually read from a TOML file:
///
/// ```toml
/// presentation_ceiling = 1000000
/// default_count = 100
/// budget_factor = 10
/// scan_timeout_secs = 30
/// seed = 42
/// ```
///
/// Every key is optional.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Largest number of sequences returned by one query.
    pub presentation_ceiling: usize,
    /// Number of sequences returned when the caller does not ask for a count.
    pub default_count: usize,
    /// Random sampling may spend `budget_factor * n` draws to find `n`
    /// distinct sequences.
    pub budget_factor: usize,
    pub scan_timeout_secs: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            presentation_ceiling: DEFAULT_PRESENTATION_CEILING,
            default_count: DEFAULT_COUNT,
            budget_factor: DEFAULT_BUDGET_FACTOR,
            scan_timeout_secs: None,
            seed: None,
        }
    }
}

impl TryFrom<&Path> for ExplorerConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: ExplorerConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.presentation_ceiling == 0 {
            return Err(ConfigError::Invalid(
                "presentation_ceiling must be at least 1".to_string(),
            ));
        }
        if self.default_count == 0 {
            return Err(ConfigError::Invalid(
                "default_count must be at least 1".to_string(),
            ));
        }
        if self.budget_factor == 0 {
            return Err(ConfigError::Invalid(
                "budget_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Largest count a query over a space of `total` sequences may return:
    /// the presentation ceiling, or `total` when smaller.
    pub fn max_count(&self, total: &BigUint) -> usize {
        match total.to_usize() {
            Some(total) => total.min(self.presentation_ceiling),
            None => self.presentation_ceiling,
        }
    }

    /// The count used when none is requested, never above [Self::max_count].
    pub fn default_count_for(&self, total: &BigUint) -> usize {
        self.default_count.min(self.max_count(total))
    }

    /// Resolve a requested count (or the default) against the limits.
    pub fn resolve_count(&self, requested: Option<usize>, total: &BigUint) -> usize {
        match requested {
            Some(n) => n.min(self.max_count(total)),
            None => self.default_count_for(total),
        }
    }

    pub fn scan_timeout(&self) -> Option<Duration> {
        self.scan_timeout_secs.map(Duration::from_secs)
    }
}
