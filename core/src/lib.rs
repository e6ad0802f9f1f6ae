//! Statistical validation of the shadow-market spread thesis.
//!
//! Two independent hypothesis tests:
//!   - macro: luxury sales growth vs consumer default rate (Pearson)
//!   - micro: shadow vs retail resale spread (simulated, Welch's t-test)

pub mod config;
pub mod error;
pub mod macro_data;
pub mod report;
pub mod rng;
pub mod simulator;
pub mod stats;
pub mod study;
pub mod types;
