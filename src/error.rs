//! Error types for projections and configuration

use thiserror::Error;

/// Errors raised by a single projection query.
///
/// Every variant carries the age pair that triggered it, so a batch caller can
/// log the failure and move on to the next pair.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Holding period is zero or negative
    #[error("invalid holding period: exit age {exit_age} must be greater than entry age {entry_age}")]
    InvalidPeriod { entry_age: u32, exit_age: u32 },

    /// Holding period longer than any human saving horizon
    #[error("invalid holding period: {periods} years from entry age {entry_age} to exit age {exit_age} exceeds {max}")]
    PeriodTooLong {
        periods: u32,
        max: u32,
        entry_age: u32,
        exit_age: u32,
    },

    /// Net contribution basis is zero or negative
    #[error("invalid net contribution basis {net_basis} for entry age {entry_age}, exit age {exit_age}")]
    InvalidBasis {
        net_basis: f64,
        entry_age: u32,
        exit_age: u32,
    },

    /// A value outside the domain of the compounding or annualized-return formula
    #[error("{parameter} = {value} is outside the numeric domain for entry age {entry_age}, exit age {exit_age}")]
    NumericDomain {
        parameter: &'static str,
        value: f64,
        entry_age: u32,
        exit_age: u32,
    },
}

/// Errors raised while loading or validating a model configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
