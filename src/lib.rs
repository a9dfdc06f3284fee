//! # countcorr
//!
//! `countcorr` is a small Rust library for exploratory correlation analysis
//! of count data from sequencing experiments. Given a table of equal-length
//! named numeric columns, it log-transforms two chosen columns
//! (`log(value + 1)`), fits an ordinary least-squares simple linear
//! regression of one transformed column against the other, and produces both
//! a structured summary of the fit and a scatter plot with the fitted line
//! and an adjusted-R² annotation.
//!
//! ## Structure
//!
//! * [`data_structs`]: The core data types — validated count tables
//!   ([`CountTable`]) backed by Polars DataFrames, and immutable regression
//!   summaries ([`RegressionStats`]).
//! * [`tools`]: The correlation report itself ([`CorrelationReport`] and the
//!   [`report`] convenience function).
//! * [`plots`]: Scatter-plot rendering on top of Plotly (feature-gated by
//!   default through the `plots` feature).
//! * [`io`]: Loading count tables from delimited text files.
//! * [`utils`]: Shared helpers — the domain-checked log transform, Pearson
//!   correlation, significant-digit formatting.
//!
//! ## Example
//!
//! ```no_run
//! use countcorr::{report, CountTable};
//!
//! fn main() -> anyhow::Result<()> {
//!     let table = CountTable::from_columns(vec![
//!         ("treated", vec![0.0, 1.0, 3.0, 12.0]),
//!         ("control", vec![1.0, 1.0, 7.0, 10.0]),
//!     ])?;
//!     let stats = report(&table, "treated", "control")?;
//!     println!("adj. R^2 = {}", stats.adj_r_squared());
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
#[cfg(feature = "plots")]
pub mod plots;
pub mod tools;
pub mod utils;

pub use crate::data_structs::regression::RegressionStats;
pub use crate::data_structs::table::CountTable;
pub use crate::error::CorrelationError;
pub use crate::tools::correlation::{report, CorrelationReport};
