// The assembled result of a whole scan
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::collections::BTreeMap;
use super::{
    round2,
    BucketScan,
    GIB,
};

// Matches the width used by the report dividers.
const DIVIDER: &str = "---------------------------------------------------";

/// The finished result of one scan, assembled by the aggregator.
///
/// `buckets` is sorted by name and the struct is never mutated after
/// construction, so the report is reproducible whatever order the scans
/// completed in.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    /// One record per enumerated bucket, sorted by name.
    pub buckets: Vec<BucketScan>,

    /// Exact byte total over all buckets. Errored buckets contribute
    /// zero. Never derived from rounded GiB figures.
    pub total_bytes: u64,

    /// Wall clock duration of the scan in seconds, rounded to two decimal
    /// places.
    pub elapsed_seconds: f64,

    /// Failure reasons for the buckets whose scan failed.
    pub errors: BTreeMap<String, String>,
}

impl ScanResult {
    /// The byte total in GiB, rounded to two decimal places.
    pub fn total_gib(&self) -> f64 {
        round2(self.total_bytes as f64 / GIB as f64)
    }

    /// The fixed multi-line summary returned to the caller.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            DIVIDER.to_string(),
            format!("Total buckets processed: {}", self.buckets.len()),
            format!("Total size of all S3 buckets: {} bytes", self.total_bytes),
            format!("Total size of all S3 buckets: {:.2} GiB", self.total_gib()),
            format!("Elapsed time: {:.2} seconds", self.elapsed_seconds),
            DIVIDER.to_string(),
            "Per-bucket sizes:".to_string(),
        ];

        for bucket in &self.buckets {
            lines.push(format!(
                "- {}: {} bytes ({:.2} GiB)",
                bucket.name,
                bucket.size_bytes,
                bucket.size_gib(),
            ));
        }

        lines.join("\n")
    }

    /// The CSV report, rows in the same canonical name order as the
    /// summary.
    pub fn to_csv(&self) -> String {
        let mut output = String::from("BucketName,SizeBytes,SizeGiB\n");

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{},{},{:.2}\n",
                bucket.name,
                bucket.size_bytes,
                bucket.size_gib(),
            ));
        }

        output
    }
}
