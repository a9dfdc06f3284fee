//! Higher-level analytical tools built on the core data types.

pub mod correlation;
