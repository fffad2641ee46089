//! Pension fund model: tax relief on entry, cost drag and withdrawal tax

mod params;
mod projection;
mod model;

pub use params::{FundParameters, ReliefRule, DEFAULT_FISCAL_CAP, MAX_HOLDING_PERIOD, WITHDRAWAL_TAX_AGE};
pub use projection::Projection;
pub use model::PensionFundModel;
