// Easily handle converting from a ListBucketsOutput into our own BucketList
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use crate::common::BucketNames;

/// Holds a `Vec` of discovered S3 bucket names.
pub struct BucketList(BucketNames);

/// Implement a conversion from `ListBucketsOutput` to `BucketList`.
impl From<ListBucketsOutput> for BucketList {
    fn from(output: ListBucketsOutput) -> Self {
        let bucket_names = match output.buckets() {
            Some(buckets) => {
                buckets.iter()
                    .filter_map(|b| b.name().map(str::to_owned))
                    .collect()
            },
            None => Vec::new(),
        };

        BucketList(bucket_names)
    }
}

impl BucketList {
    /// Return a reference to a `Vec` of `BucketNames`.
    pub fn bucket_names(&self) -> &BucketNames {
        &self.0
    }

    /// Return the names that start with `prefix`.
    ///
    /// The empty prefix keeps every name.
    pub fn filtered(&self, prefix: &str) -> BucketNames {
        self.0.iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::types::{
        Bucket,
        Owner,
    };
    use pretty_assertions::assert_eq;

    fn bucket(name: &str) -> Bucket {
        Bucket::builder()
            .name(name)
            .build()
    }

    fn bucket_list(names: &[&str]) -> BucketList {
        let owner = Owner::builder()
            .display_name("aws")
            .id("1936a5d8a2b189cda450d1d1d514f3861b3adc2df515")
            .build();

        let mut builder = ListBucketsOutput::builder().owner(owner);

        for name in names {
            builder = builder.buckets(bucket(name));
        }

        builder.build().into()
    }

    #[test]
    fn test_bucketlist_from() {
        let list = bucket_list(&["a-bucket", "another-bucket"]);

        let expected = vec![
            "a-bucket",
            "another-bucket",
        ];

        assert_eq!(list.bucket_names(), &expected);
    }

    #[test]
    fn test_bucketlist_from_empty() {
        let output = ListBucketsOutput::builder().build();
        let list: BucketList = output.into();

        assert!(list.bucket_names().is_empty());
    }

    #[test]
    fn test_filtered() {
        let list = bucket_list(&["prod-logs", "dev-logs", "prod-data"]);

        let expected = vec![
            "prod-logs",
            "prod-data",
        ];

        assert_eq!(list.filtered("prod-"), expected);
    }

    #[test]
    fn test_filtered_empty_prefix_keeps_all() {
        let list = bucket_list(&["prod-logs", "dev-logs", "prod-data"]);

        assert_eq!(list.filtered(""), *list.bucket_names());
    }

    #[test]
    fn test_filtered_no_matches() {
        let list = bucket_list(&["prod-logs", "prod-data"]);

        assert!(list.filtered("staging-").is_empty());
    }
}
