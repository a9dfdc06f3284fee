use itertools::Itertools;
use log::debug;
use polars::prelude::*;

use crate::error::CorrelationError;

/// An in-memory table of equal-length named numeric columns.
///
/// Backed by a Polars [`DataFrame`]; construction validates that every
/// column is numeric, so downstream code can materialize any column as
/// `Vec<f64>` without re-checking dtypes. Equal column lengths are enforced
/// by the DataFrame itself. The table does not restrict value ranges — the
/// log-transform domain check belongs to the report that applies it.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable {
    data: DataFrame,
}

impl CountTable {
    /// Wraps a DataFrame, rejecting non-numeric columns.
    pub fn try_new(data: DataFrame) -> Result<Self, CorrelationError> {
        for column in data.get_columns() {
            if !column.dtype().is_numeric() {
                return Err(CorrelationError::NonNumericColumn(
                    column.name().to_string(),
                ));
            }
        }
        debug!(
            "Validated count table with {} columns and {} rows",
            data.width(),
            data.height()
        );
        Ok(CountTable { data })
    }

    /// Builds a table from named columns of observations.
    ///
    /// All columns must have the same length.
    pub fn from_columns(
        columns: Vec<(&str, Vec<f64>)>,
    ) -> Result<Self, CorrelationError> {
        if let Some((_, first)) = columns.first() {
            let expected = first.len();
            for (_, values) in columns.iter() {
                if values.len() != expected {
                    return Err(CorrelationError::LengthMismatch {
                        left:  expected,
                        right: values.len(),
                    });
                }
            }
        }

        let columns = columns
            .into_iter()
            .map(|(name, values)| Column::new(name.into(), values))
            .collect_vec();
        let data = DataFrame::new(columns)
            .map_err(|e| CorrelationError::InvalidTable(e.to_string()))?;
        Self::try_new(data)
    }

    /// Materializes a named column as `Vec<f64>`.
    ///
    /// Missing observations (nulls) are an [`InvalidDomain`]-class error per
    /// the report's contract, reported with a NaN value.
    ///
    /// [`InvalidDomain`]: CorrelationError::InvalidDomain
    pub fn column_f64(
        &self,
        name: &str,
    ) -> Result<Vec<f64>, CorrelationError> {
        let column = self
            .data
            .column(name)
            .map_err(|_| CorrelationError::MissingColumn(name.to_string()))?;
        let casted = column
            .cast(&DataType::Float64)
            .map_err(|_| {
                CorrelationError::NonNumericColumn(name.to_string())
            })?;
        let chunked = casted
            .as_materialized_series()
            .f64()
            .map_err(|_| {
                CorrelationError::NonNumericColumn(name.to_string())
            })?;

        let mut values = Vec::with_capacity(chunked.len());
        for value in chunked.into_iter() {
            match value {
                Some(v) => values.push(v),
                None => {
                    return Err(CorrelationError::InvalidDomain {
                        column: name.to_string(),
                        value:  f64::NAN,
                    })
                },
            }
        }
        Ok(values)
    }

    pub fn data(&self) -> &DataFrame { &self.data }

    pub fn height(&self) -> usize { self.data.height() }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CountTable {
        CountTable::from_columns(vec![
            ("a", vec![0.0, 1.0, 3.0]),
            ("b", vec![1.0, 1.0, 7.0]),
        ])
        .unwrap()
    }

    #[test]
    fn builds_from_columns() {
        let table = sample_table();
        assert_eq!(table.height(), 3);
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.column_f64("b").unwrap(), vec![1.0, 1.0, 7.0]);
    }

    #[test]
    fn rejects_unequal_lengths() {
        let result = CountTable::from_columns(vec![
            ("a", vec![0.0, 1.0, 3.0]),
            ("b", vec![1.0, 1.0]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CorrelationError::LengthMismatch { left: 3, right: 2 }
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let table = sample_table();
        assert_eq!(
            table.column_f64("c").unwrap_err(),
            CorrelationError::MissingColumn("c".to_string())
        );
    }

    #[test]
    fn rejects_non_numeric_columns() {
        let df = df!(
            "a" => [0.0, 1.0, 3.0],
            "label" => ["x", "y", "z"],
        )
        .unwrap();
        assert_eq!(
            CountTable::try_new(df).unwrap_err(),
            CorrelationError::NonNumericColumn("label".to_string())
        );
    }

    #[test]
    fn nulls_are_invalid_domain() {
        let df = df!(
            "a" => [Some(0.0), None, Some(3.0)],
            "b" => [Some(1.0), Some(1.0), Some(7.0)],
        )
        .unwrap();
        let table = CountTable::try_new(df).unwrap();
        assert!(matches!(
            table.column_f64("a"),
            Err(CorrelationError::InvalidDomain { ref column, .. })
                if column == "a"
        ));
        assert!(table.column_f64("b").is_ok());
    }

    #[test]
    fn integer_columns_are_accepted() {
        let df = df!(
            "a" => [0i64, 1, 3],
            "b" => [1i64, 1, 7],
        )
        .unwrap();
        let table = CountTable::try_new(df).unwrap();
        assert_eq!(table.column_f64("a").unwrap(), vec![0.0, 1.0, 3.0]);
    }
}
