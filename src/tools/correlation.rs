use log::info;

use crate::data_structs::regression::{FitSide, RegressionStats};
use crate::data_structs::table::CountTable;
use crate::error::CorrelationError;
use crate::utils::{format_signif, log1p_checked};

/// Significant digits reported in the plot annotation.
const ANNOTATION_DIGITS: u32 = 4;

/// A fitted log-log correlation between two count columns.
///
/// Building the report is a pure, single-pass computation: both columns are
/// log-transformed (`log(value + 1)`), the transformed response is regressed
/// against the transformed predictor, and the transformed pairs are kept for
/// rendering. Nothing is emitted as a side effect — rendering the scatter
/// plot is a separate step, so a failed build produces no plot artifact.
///
/// The annotation text is formatted from the exact `adj_r_squared` value the
/// summary carries, so plot and summary can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationReport {
    response_name: String,
    predictor_name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    stats: RegressionStats,
    annotation: String,
}

impl CorrelationReport {
    /// Fits `log1p(response) ~ log1p(predictor)` over two table columns.
    ///
    /// # Errors
    ///
    /// - [`MissingColumn`] when either column name is absent.
    /// - [`InvalidDomain`] when any value (or a missing observation) makes
    ///   `log(value + 1)` undefined or non-finite.
    /// - [`TooFewObservations`] / [`DegenerateFit`] from the underlying fit.
    ///
    /// [`MissingColumn`]: CorrelationError::MissingColumn
    /// [`InvalidDomain`]: CorrelationError::InvalidDomain
    /// [`TooFewObservations`]: CorrelationError::TooFewObservations
    /// [`DegenerateFit`]: CorrelationError::DegenerateFit
    pub fn build(
        table: &CountTable,
        response: &str,
        predictor: &str,
    ) -> Result<Self, CorrelationError> {
        info!(
            "Building correlation report of '{}' against '{}'",
            response, predictor
        );

        let raw_y = table.column_f64(response)?;
        let raw_x = table.column_f64(predictor)?;
        let y = log1p_checked(&raw_y, response)?;
        let x = log1p_checked(&raw_x, predictor)?;

        let stats = RegressionStats::fit(&y, &x).map_err(|err| match err {
            // Name the actual table column in degenerate-variance errors.
            CorrelationError::DegenerateFit(side) => {
                let name = if side == FitSide::Response.name() {
                    response
                }
                else {
                    predictor
                };
                CorrelationError::DegenerateFit(name.to_string())
            },
            other => other,
        })?;

        let annotation = format!(
            "adj. R^2 = {}",
            format_signif(stats.adj_r_squared(), ANNOTATION_DIGITS)
        );

        Ok(CorrelationReport {
            response_name: response.to_string(),
            predictor_name: predictor.to_string(),
            x,
            y,
            stats,
            annotation,
        })
    }

    /// Log-transformed predictor values (plot x-axis).
    pub fn x(&self) -> &[f64] { &self.x }

    /// Log-transformed response values (plot y-axis).
    pub fn y(&self) -> &[f64] { &self.y }

    pub fn stats(&self) -> &RegressionStats { &self.stats }

    pub fn into_stats(self) -> RegressionStats { self.stats }

    pub fn annotation(&self) -> &str { &self.annotation }

    pub fn response_name(&self) -> &str { &self.response_name }

    pub fn predictor_name(&self) -> &str { &self.predictor_name }
}

/// Fits the log-log correlation of two columns and returns the fit summary.
///
/// Convenience wrapper around [`CorrelationReport::build`] for callers that
/// only want the statistics.
pub fn report(
    table: &CountTable,
    response: &str,
    predictor: &str,
) -> Result<RegressionStats, CorrelationError> {
    Ok(CorrelationReport::build(table, response, predictor)?.into_stats())
}
