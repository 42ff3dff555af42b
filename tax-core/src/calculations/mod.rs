//! Band calculation engine.
//!
//! Pure functions over a bracket schedule and an income; no I/O and no
//! shared state.

pub mod common;
pub mod income_tax;

pub use income_tax::{IncomeTaxWorksheet, calculate_tax};
