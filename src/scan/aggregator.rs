// Deterministic assembly of the final scan result
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    round2,
    BucketScan,
    ScanResult,
};
use std::collections::BTreeMap;

/// Assemble a `ScanResult` from scans collected in completion order.
///
/// The per-bucket listing is sorted by name with ordinal comparison so the
/// report is identical for every completion permutation. `total_bytes` is
/// the exact byte sum, never derived from rounded GiB parts.
pub fn aggregate(mut scans: Vec<BucketScan>, elapsed_seconds: f64) -> ScanResult {
    scans.sort_by(|a, b| a.name.cmp(&b.name));

    let total_bytes = scans
        .iter()
        .map(|scan| scan.size_bytes)
        .sum();

    let errors: BTreeMap<String, String> = scans
        .iter()
        .filter_map(|scan| {
            scan.error
                .as_ref()
                .map(|reason| (scan.name.clone(), reason.clone()))
        })
        .collect();

    ScanResult {
        buckets:         scans,
        total_bytes:     total_bytes,
        elapsed_seconds: round2(elapsed_seconds),
        errors:          errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scans() -> Vec<BucketScan> {
        vec![
            BucketScan::ok("gamma".into(), 5_368_709_120),
            BucketScan::failed("beta".into(), "access denied".into()),
            BucketScan::ok("alpha".into(), 1_073_741_824),
        ]
    }

    #[test]
    fn test_aggregate() {
        let result = aggregate(scans(), 1.234);

        let names: Vec<&str> = result.buckets
            .iter()
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(result.total_bytes, 6_442_450_944);
        assert_eq!(result.total_gib(), 6.0);
        assert_eq!(result.elapsed_seconds, 1.23);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors["beta"], "access denied");
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut reversed = scans();
        reversed.reverse();

        let a = aggregate(scans(), 1.0);
        let b = aggregate(reversed, 1.0);

        assert_eq!(a, b);
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate(Vec::new(), 0.005);

        assert!(result.buckets.is_empty());
        assert_eq!(result.total_bytes, 0);
        assert_eq!(result.total_gib(), 0.0);
        assert_eq!(result.elapsed_seconds, 0.01);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_aggregate_ordinal_sort() {
        // Ordinal comparison: uppercase sorts before lowercase, digits
        // before both.
        let scans = vec![
            BucketScan::ok("beta".into(), 1),
            BucketScan::ok("Alpha".into(), 2),
            BucketScan::ok("1numeric".into(), 3),
        ];

        let result = aggregate(scans, 0.0);

        let names: Vec<&str> = result.buckets
            .iter()
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(names, vec!["1numeric", "Alpha", "beta"]);
    }

    #[test]
    fn test_errored_buckets_contribute_zero() {
        let scans = vec![
            BucketScan::ok("alpha".into(), 100),
            BucketScan::failed("beta".into(), "timed out".into()),
            BucketScan::ok("gamma".into(), 200),
        ];

        let result = aggregate(scans, 0.0);

        assert_eq!(result.total_bytes, 300);
    }
}
