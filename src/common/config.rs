// Effective configuration for one invocation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use serde_json::Value;
use tracing::warn;

/// Default number of buckets scanned concurrently.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Key of the optional override object in the config bucket.
pub const CONFIG_KEY: &str = "config.json";

// Values still carrying a placeholder from the sample config are treated
// as absent.
const PLACEHOLDER: &str = "INSERT";

/// Configuration for a single scan.
///
/// Constructed once per invocation and passed by reference into every
/// component, nothing mutates it afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Maximum number of concurrently active bucket scans. Always at
    /// least 1.
    pub max_concurrency: usize,

    /// Only buckets whose name starts with this prefix are scanned. The
    /// empty prefix matches every bucket.
    pub filter_prefix: String,

    /// Bucket the CSV report is written to, if any.
    pub report_bucket: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            filter_prefix:   String::new(),
            report_bucket:   None,
        }
    }
}

impl Config {
    /// Overlay recognized fields from an external JSON object onto `self`.
    ///
    /// Recognized keys are `MAX_THREADS`, `BUCKET_FILTER_PREFIX` and
    /// `REPORT_OUTPUT_S3_BUCKET`. Each field is taken on its own: a key
    /// that is missing, of the wrong type, or otherwise unusable keeps
    /// the existing value. Unrecognized keys are ignored.
    pub fn merge_json(&self, overrides: &Value) -> Self {
        let mut config = self.clone();

        match overrides.get("MAX_THREADS").and_then(Value::as_u64) {
            Some(threads) if threads >= 1 => {
                config.max_concurrency = threads as usize;
            },
            Some(threads) => {
                warn!("Ignoring MAX_THREADS value '{}'", threads);
            },
            None => {},
        }

        if let Some(prefix) = overrides.get("BUCKET_FILTER_PREFIX").and_then(Value::as_str) {
            config.filter_prefix = prefix.to_owned();
        }

        if let Some(bucket) = overrides.get("REPORT_OUTPUT_S3_BUCKET").and_then(Value::as_str) {
            config.report_bucket = report_bucket_name(bucket);
        }

        config
    }
}

// The sample config carries the report bucket as an ARN and may still hold
// the INSERT_ placeholder. Reduce it to a plain bucket name, or nothing.
fn report_bucket_name(value: &str) -> Option<String> {
    let name = value.trim_start_matches("arn:aws:s3:::");

    if name.is_empty() || name.contains(PLACEHOLDER) {
        None
    }
    else {
        Some(name.to_owned())
    }
}
