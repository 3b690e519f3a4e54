// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Conversion of the `ListBuckets` output into a filterable name list.
mod bucket_list;

/// Implementation of the `BucketSizer` trait for our S3 `Client`.
mod bucket_sizer;

/// S3 `Client`.
mod client;

/// Mock client support for the unit tests.
#[cfg(test)]
pub mod testing;

pub use client::*;
