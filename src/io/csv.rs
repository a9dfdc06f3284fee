use std::path::Path;

use anyhow::Context;
use log::debug;
use polars::prelude::*;

use crate::data_structs::table::CountTable;

/// Reads a delimited text file with a header row into a [`CountTable`].
///
/// Column dtypes are inferred by the CSV reader; the resulting frame is
/// validated through [`CountTable::try_new`], so files with non-numeric
/// columns are rejected here rather than mid-analysis.
pub fn read_count_table(path: impl AsRef<Path>) -> anyhow::Result<CountTable> {
    let path = path.as_ref();
    debug!("Reading count table from {}", path.display());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| {
            format!("Failed to open count table '{}'", path.display())
        })?
        .finish()
        .with_context(|| {
            format!("Failed to parse count table '{}'", path.display())
        })?;

    debug!(
        "Read {} rows and {} columns from '{}'",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(CountTable::try_new(df)?)
}
