use std::error::Error;
use std::fmt;

/// Errors raised while building a correlation report.
///
/// Every variant is terminal for the current call and carries the offending
/// column name or value, so the caller can diagnose the input without
/// re-running the analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// A requested column name is absent from the table.
    MissingColumn(String),
    /// A column exists but does not hold numeric data.
    NonNumericColumn(String),
    /// A value (or a missing observation) makes `log(value + 1)` undefined
    /// or non-finite. Missing observations are reported with a NaN value.
    InvalidDomain { column: String, value: f64 },
    /// Two columns that must be aligned have different lengths.
    LengthMismatch { left: usize, right: usize },
    /// Fewer observations than the fit's residual degrees of freedom allow.
    TooFewObservations(usize),
    /// A column has zero variance after the transform, so no line can be
    /// fitted through it.
    DegenerateFit(String),
    /// The underlying DataFrame could not be constructed.
    InvalidTable(String),
}

impl fmt::Display for CorrelationError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CorrelationError::MissingColumn(name) => {
                write!(f, "Column '{}' not found in table", name)
            },
            CorrelationError::NonNumericColumn(name) => {
                write!(f, "Column '{}' is not numeric", name)
            },
            CorrelationError::InvalidDomain { column, value } => {
                write!(
                    f,
                    "Value {} in column '{}' is outside the log(x + 1) domain",
                    value, column
                )
            },
            CorrelationError::LengthMismatch { left, right } => {
                write!(f, "Column lengths differ: {} != {}", left, right)
            },
            CorrelationError::TooFewObservations(n) => {
                write!(f, "Need at least 3 observations for a fit, got {}", n)
            },
            CorrelationError::DegenerateFit(name) => {
                write!(f, "Column '{}' has zero variance, cannot fit", name)
            },
            CorrelationError::InvalidTable(desc) => {
                write!(f, "Invalid table: {}", desc)
            },
        }
    }
}

impl Error for CorrelationError {}
