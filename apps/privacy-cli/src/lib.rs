//! Privacy CLI library
//!
//! Report assembly shared by the binary and its tests.

pub mod report;

pub use report::{build_report, Determination, Mode, Report};
