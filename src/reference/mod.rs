//! Reference investment used as the comparison series

use serde::{Deserialize, Serialize};

use crate::fund::Projection;
use crate::growth::{grow_lump_sum, Money, Rate};

/// Default reference rate for a direct investment
pub const DEFAULT_REFERENCE_RATE: Rate = 0.07;

/// Grows the net contribution basis at a reference rate, with no tax rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProjector {
    reference_rate: Rate,
}

impl ReferenceProjector {
    pub fn new(reference_rate: Rate) -> Self {
        Self { reference_rate }
    }

    /// Rate drawn as the horizontal reference line
    pub fn reference_rate(&self) -> Rate {
        self.reference_rate
    }

    /// Value of `net_basis` invested once and held for `periods` periods
    pub fn project(&self, net_basis: Money, periods: u32) -> Money {
        grow_lump_sum(net_basis, self.reference_rate, periods)
    }

    /// Reference value for the same money and holding period as a fund projection
    pub fn project_projection(&self, projection: &Projection) -> Money {
        self.project(projection.net_contribution_basis, projection.periods)
    }
}

impl Default for ReferenceProjector {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund::PensionFundModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_at_reference_rate() {
        let reference = ReferenceProjector::new(0.08);
        assert_relative_eq!(reference.project(721.0, 30), 721.0 * 1.08_f64.powi(30), max_relative = 1e-9);
        assert_eq!(reference.project(721.0, 0), 721.0);
    }

    #[test]
    fn test_reference_uses_projection_basis() {
        let projection = PensionFundModel::default().opbrengst(30, 60, 1030.0).unwrap();
        let reference = ReferenceProjector::default();
        assert_relative_eq!(
            reference.project_projection(&projection),
            reference.project(721.0, 30),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fund_compared_to_reference() {
        // Investing the net basis directly at 7% beats the fund after costs and withdrawal tax
        let projection = PensionFundModel::default().opbrengst(30, 60, 1030.0).unwrap();
        let reference = ReferenceProjector::new(0.07);
        assert!(projection.net_proceeds < reference.project_projection(&projection));
        assert!(projection.annualized_return < reference.reference_rate());
    }
}
