// Outcome of sizing a single bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    round2,
    GIB,
};

/// The result of scanning one bucket.
///
/// Produced exactly once per enumerated bucket. A bucket whose listing
/// failed part way through is recorded with a size of zero and the failure
/// reason, the partial sum is discarded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketScan {
    /// The bucket name.
    pub name: String,

    /// Total size of the bucket's objects in bytes. Zero if the scan
    /// failed.
    pub size_bytes: u64,

    /// The failure reason, if the scan for this bucket failed.
    pub error: Option<String>,
}

impl BucketScan {
    /// Record a successfully sized bucket.
    pub fn ok(name: String, size_bytes: u64) -> Self {
        Self {
            name:       name,
            size_bytes: size_bytes,
            error:      None,
        }
    }

    /// Record a failed scan. The bucket contributes zero bytes.
    pub fn failed(name: String, reason: String) -> Self {
        Self {
            name:       name,
            size_bytes: 0,
            error:      Some(reason),
        }
    }

    /// The bucket size in GiB, rounded to two decimal places.
    pub fn size_gib(&self) -> f64 {
        round2(self.size_bytes as f64 / GIB as f64)
    }
}
