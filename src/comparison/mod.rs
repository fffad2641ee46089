//! Yearly savings plan: pension product with reinvested tax relief vs. direct investment
//!
//! Contributions are paid every year for a fixed horizon. The pension saver
//! invests the yearly tax relief in the direct investment, so both strategies
//! cost the saver the same gross amount.

use serde::{Deserialize, Serialize};

use crate::fund::FundParameters;
use crate::growth::{compound, Money, Rate};

/// Settings of a yearly savings plan comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Net yearly rate earned inside the pension product
    pub pension_rate: Rate,

    /// Yearly rate of the direct investment
    pub direct_rate: Rate,

    pub years: u32,
    pub annual_contribution: Money,

    /// Monthly amount of the unconstrained direct-investment plan
    pub monthly_direct_contribution: Money,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            pension_rate: 0.03,
            direct_rate: 0.08,
            years: 25,
            annual_contribution: 1030.0,
            monthly_direct_contribution: 1000.0,
        }
    }
}

/// Terminal capital of each plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub years: u32,

    /// Annual contribution invested directly instead of in the pension product
    pub direct_instead_of_pension: Money,

    /// Tax relief received each year
    pub annual_tax_relief: Money,

    /// Pension capital plus the directly invested tax relief
    pub pension_with_relief_invested: Money,

    /// Twelve monthly contributions invested directly each year
    pub direct_monthly_plan: Money,
}

impl ComparisonOutcome {
    /// Positive when the pension plan with reinvested relief ends ahead
    pub fn pension_advantage(&self) -> Money {
        self.pension_with_relief_invested - self.direct_instead_of_pension
    }
}

/// Run the yearly plan comparison, taking tax relief from the fund parameters
pub fn compare_strategies(config: &ComparisonConfig, fund: &FundParameters) -> ComparisonOutcome {
    let annual_tax_relief = fund.tax_relief(config.annual_contribution);

    let pension_capital = compound(config.pension_rate, config.annual_contribution, config.years);
    let relief_capital = compound(config.direct_rate, annual_tax_relief, config.years);

    ComparisonOutcome {
        years: config.years,
        direct_instead_of_pension: compound(config.direct_rate, config.annual_contribution, config.years),
        annual_tax_relief,
        pension_with_relief_invested: pension_capital + relief_capital,
        direct_monthly_plan: compound(
            config.direct_rate,
            12.0 * config.monthly_direct_contribution,
            config.years,
        ),
    }
}
