//! Result of a single fund yield computation

use serde::{Deserialize, Serialize};

use crate::growth::{Money, Rate};

/// Outcome of one `(entry_age, exit_age, gross_contribution)` query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub entry_age: u32,
    pub exit_age: u32,

    /// Holding period in years
    pub periods: u32,

    pub gross_contribution: Money,

    /// Gross contribution minus tax relief
    pub net_contribution_basis: Money,

    /// Capital at exit before withdrawal tax
    pub gross_accumulation: Money,

    /// Tax withheld on withdrawal (zero from the threshold age on)
    pub withdrawal_tax: Money,

    pub net_proceeds: Money,
    pub absolute_return: Money,

    /// Constant yearly rate turning the net basis into the net proceeds
    pub annualized_return: Rate,
}
