//! Fund parameters and contribution relief rules

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::growth::{Money, Rate};

/// Maximum yearly contribution eligible for tax relief
pub const DEFAULT_FISCAL_CAP: Money = 1030.0;

/// Entry age from which the withdrawal tax no longer applies
pub const WITHDRAWAL_TAX_AGE: u32 = 60;

/// Longest holding period a single query accepts, in years
pub const MAX_HOLDING_PERIOD: u32 = 150;

/// How tax relief on the gross contribution is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliefRule {
    /// Relief only on the part of the contribution up to the fiscal cap
    #[default]
    CappedAtFiscalLimit,
    /// Relief on the entire gross contribution, ignoring the cap
    FullContribution,
}

/// Immutable configuration of a pension fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundParameters {
    /// Annual growth rate of the fund before costs
    pub growth_rate: Rate,

    /// Annual ongoing cost rate, subtracted from the growth rate
    pub annual_cost_rate: Rate,

    /// Fraction of the eligible contribution returned as tax benefit
    pub contribution_tax_relief_rate: Rate,

    /// Fraction of the proceeds taxed away when entering before the threshold age
    pub withdrawal_tax_rate: Rate,

    /// Maximum contribution eligible for tax relief
    pub fiscal_cap: Money,

    /// Entry age from which no withdrawal tax is charged
    pub withdrawal_tax_age: u32,

    pub relief_rule: ReliefRule,
}

impl Default for FundParameters {
    fn default() -> Self {
        Self {
            growth_rate: 0.07,
            annual_cost_rate: 0.0144,
            contribution_tax_relief_rate: 0.30,
            withdrawal_tax_rate: 0.08,
            fiscal_cap: DEFAULT_FISCAL_CAP,
            withdrawal_tax_age: WITHDRAWAL_TAX_AGE,
            relief_rule: ReliefRule::CappedAtFiscalLimit,
        }
    }
}

impl FundParameters {
    /// Create parameters with the given growth and cost rates and default tax rules
    pub fn new(growth_rate: Rate, annual_cost_rate: Rate) -> Self {
        Self {
            growth_rate,
            annual_cost_rate,
            ..Self::default()
        }
    }

    pub fn with_relief_rate(mut self, rate: Rate) -> Self {
        self.contribution_tax_relief_rate = rate;
        self
    }

    pub fn with_withdrawal_tax_rate(mut self, rate: Rate) -> Self {
        self.withdrawal_tax_rate = rate;
        self
    }

    pub fn with_fiscal_cap(mut self, cap: Money) -> Self {
        self.fiscal_cap = cap;
        self
    }

    pub fn with_withdrawal_tax_age(mut self, age: u32) -> Self {
        self.withdrawal_tax_age = age;
        self
    }

    pub fn with_relief_rule(mut self, rule: ReliefRule) -> Self {
        self.relief_rule = rule;
        self
    }

    /// Growth rate net of ongoing costs
    pub fn net_growth_rate(&self) -> Rate {
        self.growth_rate - self.annual_cost_rate
    }

    /// Tax benefit received on a gross contribution
    pub fn tax_relief(&self, gross_contribution: Money) -> Money {
        let eligible = match self.relief_rule {
            ReliefRule::CappedAtFiscalLimit => gross_contribution.min(self.fiscal_cap),
            ReliefRule::FullContribution => gross_contribution,
        };
        eligible * self.contribution_tax_relief_rate
    }

    /// Amount the saver effectively spends after tax relief
    pub fn net_contribution_basis(&self, gross_contribution: Money) -> Money {
        gross_contribution - self.tax_relief(gross_contribution)
    }

    /// Whether proceeds of a contribution made at `entry_age` are taxed on withdrawal
    pub fn withdrawal_taxed(&self, entry_age: u32) -> bool {
        entry_age < self.withdrawal_tax_age
    }

    /// Reject rates and caps that cannot describe a real fund.
    ///
    /// Growth and cost rates are not bounded here: a factor at or below zero is
    /// reported per query, with the age pair that hit it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("contribution_tax_relief_rate", self.contribution_tax_relief_rate)?;
        check_fraction("withdrawal_tax_rate", self.withdrawal_tax_rate)?;

        for (key, value) in [
            ("growth_rate", self.growth_rate),
            ("annual_cost_rate", self.annual_cost_rate),
        ] {
            if !value.is_finite() {
                return Err(invalid(key, format!("{} is not a finite number", value)));
            }
        }

        if !self.fiscal_cap.is_finite() || self.fiscal_cap < 0.0 {
            return Err(invalid(
                "fiscal_cap",
                format!("{} must be a non-negative amount", self.fiscal_cap),
            ));
        }

        Ok(())
    }
}

fn check_fraction(key: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(key, format!("{} must lie between 0 and 1", value)));
    }
    Ok(())
}

fn invalid(key: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason,
    }
}
