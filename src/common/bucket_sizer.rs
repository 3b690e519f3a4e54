// BucketSizer trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;

/// `BucketSizer` represents the required method to find the size of a
/// single S3 bucket.
///
/// This trait should be implemented by all `Client`s performing this task.
/// The scan coordinator fans out over this seam, which keeps it testable
/// without AWS.
#[async_trait]
pub trait BucketSizer {
    /// Returns the size of the given `bucket` in bytes.
    async fn bucket_size(&self, bucket: &str) -> Result<u64>;
}
