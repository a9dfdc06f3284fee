use log::{debug, trace};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::CorrelationError;

/// Which side of a simple linear fit a column sits on.
///
/// [`RegressionStats::fit`] sees only value slices, so degenerate-variance
/// errors name the side; the caller maps it back to a column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitSide {
    Response,
    Predictor,
}

/// Immutable summary of an ordinary least-squares simple linear regression.
///
/// Constructed once per fit and never mutated; repeated fits over identical
/// inputs yield identical summaries. Mirrors the fields of a classic linear
/// model summary: coefficients with their standard errors, the slope's
/// t-statistic and two-sided p-value, the residual standard error with its
/// degrees of freedom, and both plain and adjusted coefficients of
/// determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionStats {
    n_obs: usize,
    slope: f64,
    intercept: f64,
    slope_std_err: f64,
    intercept_std_err: f64,
    slope_t_value: f64,
    slope_p_value: f64,
    residual_std_err: f64,
    df_residual: usize,
    r_squared: f64,
    adj_r_squared: f64,
}

impl RegressionStats {
    /// Fits `response ~ predictor` with an intercept.
    ///
    /// # Errors
    ///
    /// - [`LengthMismatch`] when the slices differ in length.
    /// - [`TooFewObservations`] when fewer than 3 points are supplied (the
    ///   residual degrees of freedom would be zero).
    /// - [`DegenerateFit`] when either variable has zero variance.
    ///
    /// [`LengthMismatch`]: CorrelationError::LengthMismatch
    /// [`TooFewObservations`]: CorrelationError::TooFewObservations
    /// [`DegenerateFit`]: CorrelationError::DegenerateFit
    pub fn fit(
        response: &[f64],
        predictor: &[f64],
    ) -> Result<Self, CorrelationError> {
        if response.len() != predictor.len() {
            return Err(CorrelationError::LengthMismatch {
                left:  response.len(),
                right: predictor.len(),
            });
        }
        let n = response.len();
        if n < 3 {
            return Err(CorrelationError::TooFewObservations(n));
        }
        let n_f64 = n as f64;

        let x_mean = predictor.iter().sum::<f64>() / n_f64;
        let y_mean = response.iter().sum::<f64>() / n_f64;

        let mut s_xx = 0.0;
        let mut s_xy = 0.0;
        let mut s_yy = 0.0;
        for (&x, &y) in predictor.iter().zip(response.iter()) {
            s_xx += (x - x_mean).powi(2);
            s_xy += (x - x_mean) * (y - y_mean);
            s_yy += (y - y_mean).powi(2);
        }
        trace!("Sxx={:.6}, Sxy={:.6}, Syy={:.6}", s_xx, s_xy, s_yy);

        if s_xx == 0.0 {
            return Err(CorrelationError::DegenerateFit(
                FitSide::Predictor.name().to_string(),
            ));
        }
        if s_yy == 0.0 {
            return Err(CorrelationError::DegenerateFit(
                FitSide::Response.name().to_string(),
            ));
        }

        let slope = s_xy / s_xx;
        let intercept = y_mean - slope * x_mean;

        // Residual sum of squares; clamp tiny negatives from rounding on
        // near-perfect fits.
        let sse = (s_yy - slope * s_xy).max(0.0);
        let df_residual = n - 2;
        let mse = sse / df_residual as f64;
        let residual_std_err = mse.sqrt();

        let slope_std_err = (mse / s_xx).sqrt();
        let intercept_std_err =
            residual_std_err * (1.0 / n_f64 + x_mean.powi(2) / s_xx).sqrt();

        let r_squared = 1.0 - sse / s_yy;
        let adj_r_squared =
            1.0 - (1.0 - r_squared) * (n_f64 - 1.0) / (n_f64 - 2.0);

        let slope_t_value = slope / slope_std_err;
        let slope_p_value = if slope_t_value.is_finite() {
            // Arguments are valid by construction: df_residual >= 1.
            let t_dist =
                StudentsT::new(0.0, 1.0, df_residual as f64).unwrap();
            2.0 * (1.0 - t_dist.cdf(slope_t_value.abs()))
        }
        else {
            0.0
        };

        debug!(
            "Fitted y = {:.6} + {:.6} x on {} points (adj. R^2 = {:.6})",
            intercept, slope, n, adj_r_squared
        );

        Ok(RegressionStats {
            n_obs: n,
            slope,
            intercept,
            slope_std_err,
            intercept_std_err,
            slope_t_value,
            slope_p_value,
            residual_std_err,
            df_residual,
            r_squared,
            adj_r_squared,
        })
    }

    /// Evaluates the fitted line at `x`.
    pub fn predict(
        &self,
        x: f64,
    ) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn n_obs(&self) -> usize { self.n_obs }

    pub fn slope(&self) -> f64 { self.slope }

    pub fn intercept(&self) -> f64 { self.intercept }

    pub fn slope_std_err(&self) -> f64 { self.slope_std_err }

    pub fn intercept_std_err(&self) -> f64 { self.intercept_std_err }

    pub fn slope_t_value(&self) -> f64 { self.slope_t_value }

    pub fn slope_p_value(&self) -> f64 { self.slope_p_value }

    pub fn residual_std_err(&self) -> f64 { self.residual_std_err }

    pub fn df_residual(&self) -> usize { self.df_residual }

    pub fn r_squared(&self) -> f64 { self.r_squared }

    pub fn adj_r_squared(&self) -> f64 { self.adj_r_squared }
}

impl FitSide {
    pub fn name(&self) -> &'static str {
        match self {
            FitSide::Response => "response",
            FitSide::Predictor => "predictor",
        }
    }
}
