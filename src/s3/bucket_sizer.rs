// Implement the BucketSizer trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::BucketSizer;
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketSizer for Client {
    /// Return the size of `bucket`.
    ///
    /// Any listing failure propagates to the caller here; the scan
    /// coordinator is what folds it into a zero-size record.
    async fn bucket_size(&self, bucket: &str) -> Result<u64> {
        debug!("bucket_size: Calculating size for '{}'", bucket);

        let size = self.size_objects(bucket).await?;

        debug!("bucket_size: size for '{}' is '{}'", bucket, size);

        Ok(size)
    }
}
