pub mod report;

pub use report::{build_report, eprint_errors};
