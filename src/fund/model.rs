//! Yield computation for a single contribution into the pension fund

use log::debug;

use super::params::{FundParameters, MAX_HOLDING_PERIOD};
use super::projection::Projection;
use crate::error::ProjectionError;
use crate::growth::{grow_lump_sum, Money};

/// Pension fund model over an immutable set of parameters
#[derive(Debug, Clone)]
pub struct PensionFundModel {
    params: FundParameters,
}

impl PensionFundModel {
    pub fn new(params: FundParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FundParameters {
        &self.params
    }

    /// Yield of a contribution equal to the fiscal cap
    pub fn opbrengst_at_cap(&self, entry_age: u32, exit_age: u32) -> Result<Projection, ProjectionError> {
        self.opbrengst(entry_age, exit_age, self.params.fiscal_cap)
    }

    /// Compute the yield of a single gross contribution made at `entry_age`
    /// and withdrawn at `exit_age`.
    ///
    /// The full gross contribution is invested and grows at the growth rate
    /// net of costs. Proceeds are taxed on withdrawal when the contribution
    /// was made before the withdrawal tax age. Returns are measured against
    /// the net basis, i.e. what the saver paid after tax relief.
    pub fn opbrengst(
        &self,
        entry_age: u32,
        exit_age: u32,
        gross_contribution: Money,
    ) -> Result<Projection, ProjectionError> {
        if exit_age <= entry_age {
            return Err(ProjectionError::InvalidPeriod { entry_age, exit_age });
        }
        let periods = exit_age - entry_age;
        if periods > MAX_HOLDING_PERIOD {
            return Err(ProjectionError::PeriodTooLong {
                periods,
                max: MAX_HOLDING_PERIOD,
                entry_age,
                exit_age,
            });
        }

        let net_basis = self.params.net_contribution_basis(gross_contribution);
        if !(net_basis > 0.0) {
            return Err(ProjectionError::InvalidBasis {
                net_basis,
                entry_age,
                exit_age,
            });
        }

        let net_rate = self.params.net_growth_rate();
        if !(1.0 + net_rate > 0.0) {
            return Err(ProjectionError::NumericDomain {
                parameter: "growth_rate - annual_cost_rate",
                value: net_rate,
                entry_age,
                exit_age,
            });
        }

        let gross_accumulation = grow_lump_sum(gross_contribution, net_rate, periods);
        let withdrawal_tax = if self.params.withdrawal_taxed(entry_age) {
            gross_accumulation * self.params.withdrawal_tax_rate
        } else {
            0.0
        };
        let net_proceeds = gross_accumulation - withdrawal_tax;

        let multiple = net_proceeds / net_basis;
        if !multiple.is_finite() || multiple < 0.0 {
            return Err(ProjectionError::NumericDomain {
                parameter: "net_proceeds / net_basis",
                value: multiple,
                entry_age,
                exit_age,
            });
        }
        let annualized_return = multiple.powf(1.0 / periods as f64) - 1.0;

        debug!(
            "opbrengst {}->{}: basis={:.2}, proceeds={:.2}, annualized={:.6}",
            entry_age, exit_age, net_basis, net_proceeds, annualized_return
        );

        Ok(Projection {
            entry_age,
            exit_age,
            periods,
            gross_contribution,
            net_contribution_basis: net_basis,
            gross_accumulation,
            withdrawal_tax,
            net_proceeds,
            absolute_return: net_proceeds - net_basis,
            annualized_return,
        })
    }
}

impl Default for PensionFundModel {
    fn default() -> Self {
        Self::new(FundParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund::ReliefRule;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_scenario_30_to_60() {
        let model = PensionFundModel::default();
        let p = model.opbrengst(30, 60, 1030.0).unwrap();

        assert_eq!(p.periods, 30);
        assert_relative_eq!(p.net_contribution_basis, 721.0, max_relative = 1e-12);
        assert_relative_eq!(p.gross_accumulation, 5221.781209966751, max_relative = 1e-6);
        assert_relative_eq!(p.net_proceeds, 4804.038713169411, max_relative = 1e-6);
        assert_relative_eq!(p.absolute_return, 4083.0387131694106, max_relative = 1e-6);
        assert_relative_eq!(p.annualized_return, 0.06526021588433717, max_relative = 1e-6);
    }

    #[test]
    fn test_annualized_return_reproduces_proceeds() {
        let model = PensionFundModel::default();
        let p = model.opbrengst(25, 67, 1030.0).unwrap();
        let regrown = p.net_contribution_basis * (1.0 + p.annualized_return).powi(p.periods as i32);
        assert_relative_eq!(regrown, p.net_proceeds, max_relative = 1e-9);
    }

    #[test]
    fn test_default_contribution_is_fiscal_cap() {
        let model = PensionFundModel::default();
        assert_eq!(model.opbrengst_at_cap(40, 65).unwrap(), model.opbrengst(40, 65, 1030.0).unwrap());
    }

    #[test]
    fn test_proceeds_increase_with_exit_age() {
        let model = PensionFundModel::default();
        let mut previous = 0.0;
        for exit_age in 36..=90 {
            let p = model.opbrengst_at_cap(35, exit_age).unwrap();
            assert!(p.net_proceeds > previous, "exit age {} did not grow", exit_age);
            previous = p.net_proceeds;
        }
    }

    #[test]
    fn test_withdrawal_tax_boundary_at_sixty() {
        let model = PensionFundModel::default();
        let untaxed = model.opbrengst(60, 67, 1030.0).unwrap();
        let taxed = model.opbrengst(59, 67, 1030.0).unwrap();

        assert_eq!(untaxed.withdrawal_tax, 0.0);
        assert_relative_eq!(untaxed.net_proceeds, untaxed.gross_accumulation);
        assert!(taxed.withdrawal_tax > 0.0);

        // Entry at 59 holds one period longer; taking that out leaves the tax factor
        let factor = 1.0 + model.params().net_growth_rate();
        let ratio = untaxed.net_proceeds / (taxed.net_proceeds / factor);
        assert_relative_eq!(ratio, 1.0 / (1.0 - 0.08), max_relative = 1e-9);
    }

    #[test]
    fn test_withdrawal_tax_ratio_without_growth() {
        // With growth equal to costs both holding periods end at the same capital
        let model = PensionFundModel::new(FundParameters::new(0.02, 0.02));
        let untaxed = model.opbrengst(60, 67, 1030.0).unwrap();
        let taxed = model.opbrengst(59, 67, 1030.0).unwrap();
        assert_relative_eq!(untaxed.net_proceeds / taxed.net_proceeds, 1.0 / 0.92, max_relative = 1e-12);
    }

    #[test]
    fn test_full_contribution_relief_above_cap() {
        let params = FundParameters::default().with_relief_rule(ReliefRule::FullContribution);
        let full = PensionFundModel::new(params).opbrengst(30, 60, 2000.0).unwrap();
        let capped = PensionFundModel::default().opbrengst(30, 60, 2000.0).unwrap();

        assert_relative_eq!(full.net_contribution_basis, 1400.0, max_relative = 1e-12);
        assert_relative_eq!(capped.net_contribution_basis, 1691.0, max_relative = 1e-12);
        // Same capital, smaller basis
        assert_relative_eq!(full.net_proceeds, capped.net_proceeds);
        assert!(full.annualized_return > capped.annualized_return);
    }

    #[test]
    fn test_equal_ages_is_invalid_period() {
        let model = PensionFundModel::default();
        assert_eq!(
            model.opbrengst(60, 60, 1030.0),
            Err(ProjectionError::InvalidPeriod { entry_age: 60, exit_age: 60 })
        );
        assert!(matches!(
            model.opbrengst(65, 60, 1030.0),
            Err(ProjectionError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_non_positive_basis_is_rejected() {
        let full_relief = PensionFundModel::new(FundParameters::default().with_relief_rate(1.0));
        assert!(matches!(
            full_relief.opbrengst(30, 60, 1030.0),
            Err(ProjectionError::InvalidBasis { .. })
        ));

        let model = PensionFundModel::default();
        assert!(matches!(
            model.opbrengst(30, 60, -100.0),
            Err(ProjectionError::InvalidBasis { .. })
        ));
        assert!(matches!(
            model.opbrengst(30, 60, 0.0),
            Err(ProjectionError::InvalidBasis { .. })
        ));
    }

    #[test]
    fn test_collapsing_growth_factor_is_domain_error() {
        let model = PensionFundModel::new(FundParameters::new(0.01, 1.5));
        let err = model.opbrengst(30, 60, 1030.0).unwrap_err();
        assert!(matches!(err, ProjectionError::NumericDomain { entry_age: 30, exit_age: 60, .. }));
        assert!(err.to_string().contains("growth_rate - annual_cost_rate"));
    }

    #[test]
    fn test_withdrawal_tax_above_proceeds_is_domain_error() {
        let model = PensionFundModel::new(FundParameters::default().with_withdrawal_tax_rate(1.5));
        let err = model.opbrengst(30, 60, 1030.0).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::NumericDomain { parameter: "net_proceeds / net_basis", .. }
        ));

        // No withdrawal tax from the threshold age, so the same fund still projects
        assert!(model.opbrengst(60, 67, 1030.0).is_ok());
    }

    #[test]
    fn test_absurd_holding_period_is_rejected() {
        let model = PensionFundModel::default();
        assert_eq!(
            model.opbrengst(0, u32::MAX, 1030.0),
            Err(ProjectionError::PeriodTooLong {
                periods: u32::MAX,
                max: MAX_HOLDING_PERIOD,
                entry_age: 0,
                exit_age: u32::MAX,
            })
        );
        assert!(model.opbrengst(0, MAX_HOLDING_PERIOD, 1030.0).is_ok());
    }

    #[test]
    fn test_negative_net_rate_still_real() {
        let model = PensionFundModel::new(FundParameters::new(0.0, 0.05));
        let p = model.opbrengst(60, 70, 1000.0).unwrap();
        assert!(p.annualized_return.is_finite());
        assert!(p.net_proceeds < p.gross_contribution);
    }

    #[test]
    fn test_error_message_names_age_pair() {
        let err = PensionFundModel::default().opbrengst(61, 61, 1030.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("61"));
        assert!(message.contains("exit age"));
    }
}
