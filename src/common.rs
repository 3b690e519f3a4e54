// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket_scan;
mod bucket_sizer;
mod config;
mod region;
mod response;
mod scan_result;

pub use bucket_scan::*;
pub use bucket_sizer::*;
pub use config::*;
pub use region::*;
pub use response::*;
pub use scan_result::*;

/// Convenience type for a list of bucket names.
pub type BucketNames = Vec<String>;

/// One gibibyte in bytes.
pub const GIB: u64 = 1 << 30;

/// Round to two decimal places.
///
/// Used for GiB figures and elapsed times in the report.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
