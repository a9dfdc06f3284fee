//! Shared helpers used across the crate.
//!
//! Key functionalities include:
//!
//! - The domain-checked `log(value + 1)` transform applied to count columns
//!   before fitting.
//! - Pearson correlation coefficient between two variables.
//! - Fixed significant-digit formatting for plot annotations.

use std::fmt;

use log::{debug, warn};

use crate::error::CorrelationError;

/// Transforms a column elementwise as `log(value + 1)`.
///
/// The transform is only defined for values greater than -1; a value of -1
/// maps to negative infinity and would poison the downstream fit, so it is
/// rejected as well. NaN inputs (missing observations) are rejected for the
/// same reason. The offending column name and value are carried in the
/// returned error.
pub fn log1p_checked(
    values: &[f64],
    column: &str,
) -> Result<Vec<f64>, CorrelationError> {
    let mut transformed = Vec::with_capacity(values.len());
    for &value in values {
        let log_value = value.ln_1p();
        if !log_value.is_finite() {
            warn!(
                "Value {} in column '{}' is outside the log(x + 1) domain",
                value, column
            );
            return Err(CorrelationError::InvalidDomain {
                column: column.to_string(),
                value,
            });
        }
        transformed.push(log_value);
    }
    debug!("Transformed {} values from column '{}'", values.len(), column);
    Ok(transformed)
}

/// Calculates Pearson correlation coefficient between two variables.
pub fn pearson_r<X, Y>(
    x: &[X],
    y: &[Y],
) -> f64
where
    X: num::ToPrimitive + Copy + fmt::Debug,
    Y: num::ToPrimitive + Copy + fmt::Debug,
{
    if x.len() != y.len() {
        warn!(
            "Cannot calculate Pearson's r: x length ({}) doesn't match y \
             length ({})",
            x.len(),
            y.len()
        );
        return 0.0;
    }

    if x.is_empty() {
        warn!("Cannot calculate Pearson's r: empty arrays");
        return 0.0;
    }

    let x_f64 = x
        .iter()
        .map(|x| x.to_f64().unwrap())
        .collect::<Vec<_>>();
    let y_f64 = y
        .iter()
        .map(|y| y.to_f64().unwrap())
        .collect::<Vec<_>>();

    let x_mean = x_f64.iter().sum::<f64>() / x_f64.len() as f64;
    let y_mean = y_f64.iter().sum::<f64>() / y_f64.len() as f64;

    let numerator = x_f64
        .iter()
        .zip(y_f64.iter())
        .map(|(valx, valy)| (valx - x_mean) * (valy - y_mean))
        .sum::<f64>();

    let denominator = {
        let x_dev: f64 = x_f64
            .iter()
            .map(|valx| (valx - x_mean).powi(2))
            .sum();
        let y_dev: f64 = y_f64
            .iter()
            .map(|valy| (valy - y_mean).powi(2))
            .sum();
        (x_dev * y_dev).sqrt()
    };

    if denominator == 0.0 {
        debug!("Denominator is zero, returning r=0");
        return 0.0;
    }

    let r = numerator / denominator;
    debug!("Pearson's r = {:.4}", r);
    r
}

/// Formats a value with a fixed number of significant digits.
///
/// Used for the adjusted-R² plot annotation, which reports 4 significant
/// digits of the same value the fit summary returns.
pub fn format_signif(
    value: f64,
    digits: u32,
) -> String {
    let digits = digits.max(1);
    if !value.is_finite() || value == 0.0 {
        return format!("{:.*}", digits as usize - 1, value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}
