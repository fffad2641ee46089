//! Model configuration from a JSON file and environment overrides
//!
//! Recognised environment variables:
//!   GROWTH_RATE, COST_RATE, RELIEF_RATE, WITHDRAWAL_TAX_RATE, FISCAL_CAP,
//!   REFERENCE_RATE

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonConfig;
use crate::error::ConfigError;
use crate::fund::FundParameters;
use crate::reference::{ReferenceProjector, DEFAULT_REFERENCE_RATE};

/// Everything a run needs, created once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub fund: FundParameters,
    pub reference_rate: f64,
    pub comparison: ComparisonConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            fund: FundParameters::default(),
            reference_rate: DEFAULT_REFERENCE_RATE,
            comparison: ComparisonConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Load a config file; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Load from an optional file, apply environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => {
                debug!("Loading model config from {}", p.display());
                Self::from_json_path(p)?
            }
            None => Self::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> Result<Option<f64>, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|e| ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!("{:?} is not a number ({})", raw, e),
                    }),
                None => Ok(None),
            }
        };

        if let Some(v) = read("GROWTH_RATE")? {
            self.fund.growth_rate = v;
        }
        if let Some(v) = read("COST_RATE")? {
            self.fund.annual_cost_rate = v;
        }
        if let Some(v) = read("RELIEF_RATE")? {
            self.fund.contribution_tax_relief_rate = v;
        }
        if let Some(v) = read("WITHDRAWAL_TAX_RATE")? {
            self.fund.withdrawal_tax_rate = v;
        }
        if let Some(v) = read("FISCAL_CAP")? {
            self.fund.fiscal_cap = v;
        }
        if let Some(v) = read("REFERENCE_RATE")? {
            self.reference_rate = v;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fund.validate()?;
        if !self.reference_rate.is_finite() || self.reference_rate <= -1.0 {
            return Err(ConfigError::InvalidValue {
                key: "reference_rate".to_string(),
                reason: format!("{} must be greater than -1", self.reference_rate),
            });
        }
        Ok(())
    }

    pub fn reference(&self) -> ReferenceProjector {
        ReferenceProjector::new(self.reference_rate)
    }
}
