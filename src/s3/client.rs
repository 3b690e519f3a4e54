// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use crate::common::{
    BucketNames,
    Region,
    ScanResult,
    CONFIG_KEY,
};
use serde_json::Value;
use tracing::debug;
use super::bucket_list::BucketList;

// Reports are grouped under this prefix in the report bucket.
const REPORT_KEY_PREFIX: &str = "s3_bucket_sizes";

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// `Region` that the client was created in.
    pub region: Region,
}

impl Client {
    /// Return a new S3 `Client` in the given `Region`.
    pub async fn new(region: Region) -> Self {
        debug!("new: Creating S3Client in region '{}'", region.name());

        let sdk_config = aws_config::from_env()
            .region(region.clone())
            .load()
            .await;

        let client = S3Client::new(&sdk_config);

        Client {
            client: client,
            region: region,
        }
    }

    /// Returns the names of all buckets visible to the current
    /// credentials, filtered to those starting with `prefix`.
    ///
    /// Failure here is fatal to the scan. Without the bucket universe no
    /// partial result is meaningful.
    pub async fn list_buckets(&self, prefix: &str) -> Result<BucketNames> {
        debug!("list_buckets: Listing with prefix '{}'", prefix);

        let output = self.client.list_buckets().send().await?;

        let bucket_list: BucketList = output.into();

        Ok(bucket_list.filtered(prefix))
    }

    /// Return the total size in bytes of current objects in the bucket.
    ///
    /// Pages through the full object listing, following continuation
    /// tokens until none remain.
    pub async fn size_objects(&self, bucket: &str) -> Result<u64> {
        debug!("size_objects for '{}'", bucket);

        let mut continuation_token = None;
        let mut size: u64          = 0;

        // Loop until all objects are processed.
        loop {
            let output = self.client.list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation_token.take())
                .send()
                .await?;

            // Process the contents and add up the sizes
            if let Some(contents) = output.contents() {
                size += contents
                    .iter()
                    .map(|o| o.size().max(0) as u64)
                    .sum::<u64>();
            }

            // If the output was truncated, we should have a
            // next_continuation_token for the next loop.
            if output.is_truncated() {
                continuation_token = output
                    .next_continuation_token()
                    .map(str::to_owned);
            }
            else {
                break;
            }
        }

        Ok(size)
    }

    /// Fetch and parse the JSON override object from the config bucket.
    ///
    /// Callers treat any failure here as soft and fall back to the
    /// built-in defaults.
    pub async fn fetch_config(&self, bucket: &str) -> Result<Value> {
        debug!("fetch_config from '{}/{}'", bucket, CONFIG_KEY);

        let output = self.client.get_object()
            .bucket(bucket)
            .key(CONFIG_KEY)
            .send()
            .await?;

        let bytes = output.body.collect().await?.into_bytes();
        let value = serde_json::from_slice(&bytes)?;

        Ok(value)
    }

    /// Upload the CSV report, keyed with the scan start time in seconds.
    ///
    /// Returns the object key the report was written under.
    pub async fn put_report(
        &self,
        bucket: &str,
        started_at: u64,
        result: &ScanResult,
    ) -> Result<String> {
        let key = format!("{}/report_{}.csv", REPORT_KEY_PREFIX, started_at);

        debug!("put_report to '{}/{}'", bucket, key);

        let body = ByteStream::from(result.to_csv().into_bytes());

        self.client.put_object()
            .bucket(bucket)
            .key(&key)
            .body(body)
            .send()
            .await?;

        Ok(key)
    }
}
