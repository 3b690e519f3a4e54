// The concurrent scan-and-aggregate engine
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Deterministic assembly of the final `ScanResult`.
mod aggregator;

/// Bounded worker-pool fan-out over per-bucket scans.
mod coordinator;

pub use aggregator::*;
pub use coordinator::*;
