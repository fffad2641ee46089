//! Scenario runner for batches of fund projections
//!
//! Evaluates the fund model over a range of entry ages for one or more exit
//! ages and pairs every projection with its reference investment. The series
//! are what a chart consumer plots: proceeds and annualized return against
//! entry age, with the reference series and reference rate alongside.

use std::ops::RangeInclusive;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::fund::{FundParameters, PensionFundModel, Projection};
use crate::growth::{Money, Rate};
use crate::reference::ReferenceProjector;

/// One point of a series, keyed by entry age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub entry_age: u32,
    pub projection: Projection,

    /// Net basis grown at the reference rate over the same holding period
    pub reference_value: Money,

    /// Annualized return of the reference value against the net basis
    pub reference_annualized_return: Rate,
}

/// Projections for a single exit age, in ascending entry age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub exit_age: u32,
    pub reference_rate: Rate,
    pub points: Vec<SeriesPoint>,

    /// Entry ages left out, with the reason
    #[serde(skip)]
    pub skipped: Vec<(u32, ProjectionError)>,
}

/// Runs projections against one fund and one reference investment
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(FundParameters::default(), ReferenceProjector::new(0.07));
/// let series = runner.run_scenarios(18..=66, &[60, 67], 1030.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    model: PensionFundModel,
    reference: ReferenceProjector,
}

impl ScenarioRunner {
    pub fn new(params: FundParameters, reference: ReferenceProjector) -> Self {
        Self {
            model: PensionFundModel::new(params),
            reference,
        }
    }

    pub fn model(&self) -> &PensionFundModel {
        &self.model
    }

    pub fn reference(&self) -> &ReferenceProjector {
        &self.reference
    }

    /// Project a single age pair together with its reference value
    pub fn run(
        &self,
        entry_age: u32,
        exit_age: u32,
        gross_contribution: Money,
    ) -> Result<SeriesPoint, ProjectionError> {
        let projection = self.model.opbrengst(entry_age, exit_age, gross_contribution)?;

        let reference_rate = self.reference.reference_rate();
        if !(1.0 + reference_rate > 0.0) {
            return Err(ProjectionError::NumericDomain {
                parameter: "reference_rate",
                value: reference_rate,
                entry_age,
                exit_age,
            });
        }

        let reference_value = self.reference.project_projection(&projection);
        let multiple = reference_value / projection.net_contribution_basis;
        if !multiple.is_finite() || multiple < 0.0 {
            return Err(ProjectionError::NumericDomain {
                parameter: "reference_value / net_basis",
                value: multiple,
                entry_age,
                exit_age,
            });
        }
        let reference_annualized_return = multiple.powf(1.0 / projection.periods as f64) - 1.0;

        Ok(SeriesPoint {
            entry_age,
            projection,
            reference_value,
            reference_annualized_return,
        })
    }

    /// Project every entry age in the range against one exit age.
    ///
    /// Failing ages are skipped and recorded, the rest of the batch continues.
    pub fn run_series(
        &self,
        entry_ages: RangeInclusive<u32>,
        exit_age: u32,
        gross_contribution: Money,
    ) -> ProjectionSeries {
        let mut points = Vec::new();
        let mut skipped = Vec::new();

        for entry_age in entry_ages {
            match self.run(entry_age, exit_age, gross_contribution) {
                Ok(point) => points.push(point),
                Err(e) => {
                    warn!("Skipping entry age {}: {}", entry_age, e);
                    skipped.push((entry_age, e));
                }
            }
        }

        ProjectionSeries {
            exit_age,
            reference_rate: self.reference.reference_rate(),
            points,
            skipped,
        }
    }

    /// Run one series per exit age in parallel, keeping the order of `exit_ages`
    pub fn run_scenarios(
        &self,
        entry_ages: RangeInclusive<u32>,
        exit_ages: &[u32],
        gross_contribution: Money,
    ) -> Vec<ProjectionSeries> {
        let series: Vec<ProjectionSeries> = exit_ages
            .par_iter()
            .map(|&exit_age| self.run_series(entry_ages.clone(), exit_age, gross_contribution))
            .collect();

        let points: usize = series.iter().map(|s| s.points.len()).sum();
        let skipped: usize = series.iter().map(|s| s.skipped.len()).sum();
        info!(
            "Projected {} scenarios: {} points, {} skipped",
            series.len(),
            points,
            skipped
        );

        series
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(FundParameters::default(), ReferenceProjector::default())
    }
}
