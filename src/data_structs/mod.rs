//! Core data types: validated count tables and immutable fit summaries.

pub mod regression;
pub mod table;
