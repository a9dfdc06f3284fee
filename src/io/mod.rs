//! File input for count tables.

pub mod csv;

pub use csv::read_count_table;
