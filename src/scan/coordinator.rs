// Bounded fan-out of per-bucket size scans
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketNames,
    BucketScan,
    BucketSizer,
};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{
    info,
    warn,
};

/// Run `bucket_size` for every name with at most `max_concurrency` scans
/// in flight, collecting results as they complete.
///
/// A failed scan is folded into a zero-size record carrying the failure
/// reason; it never aborts the sibling scans. The returned `Vec` holds
/// exactly one record per input name, in completion order. Completion
/// order carries no meaning, the aggregator sorts.
pub async fn scan_buckets<S>(
    sizer: Arc<S>,
    names: BucketNames,
    max_concurrency: usize,
) -> Vec<BucketScan>
where
    S: BucketSizer + Send + Sync + 'static,
{
    let total = names.len();

    info!("Starting scan of {} buckets...", total);

    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut tasks: JoinSet<BucketScan> = JoinSet::new();

    for name in names {
        let sizer     = Arc::clone(&sizer);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            // The semaphore is never closed, acquire_owned cannot fail.
            let _permit = semaphore.acquire_owned().await.unwrap();

            match sizer.bucket_size(&name).await {
                Ok(size) => BucketScan::ok(name, size),
                Err(e)   => {
                    warn!("Error accessing bucket {}: {:#}", name, e);

                    BucketScan::failed(name, format!("{e:#}"))
                },
            }
        });
    }

    let mut scans = Vec::with_capacity(total);

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(scan) => {
                info!(
                    "[{}/{}] {}: {} bytes ({:.2} GiB)",
                    scans.len() + 1,
                    total,
                    scan.name,
                    scan.size_bytes,
                    scan.size_gib(),
                );

                scans.push(scan);
            },
            // Only reachable if a scan task panicked.
            Err(e) => warn!("Scan task failed: {}", e),
        }
    }

    scans
}
