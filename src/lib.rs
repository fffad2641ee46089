//! Pension Projection - deterministic compound-growth model for pension savings
//!
//! This library provides:
//! - Fixed-rate compounding of lump sums and periodic contributions
//! - Pension fund yields with tax relief, cost drag and withdrawal tax
//! - Reference investment series for comparison charts
//! - Batch projections over entry-age ranges

pub mod error;
pub mod growth;
pub mod fund;
pub mod reference;
pub mod comparison;
pub mod scenario;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use error::{ConfigError, ProjectionError};
pub use fund::{FundParameters, PensionFundModel, Projection, ReliefRule};
pub use reference::ReferenceProjector;
pub use scenario::{ProjectionSeries, ScenarioRunner, SeriesPoint};
pub use config::ModelConfig;
