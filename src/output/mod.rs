//! Output formatting module
//!
//! The run report goes to stdout; progress logging goes to stderr.

mod common;
mod report;

pub use common::{print_json, print_yaml};
pub use report::{output_report, report_table};
