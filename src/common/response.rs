// Invocation response
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// What the caller gets back from a scan.
///
/// A scan always resolves to one of exactly two shapes: a 200 carrying the
/// full summary text (zero buckets and partially errored buckets
/// included), or a 500 carrying a single fatal message when the bucket
/// list itself could not be obtained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    /// 200 on success, 500 on fatal enumeration failure.
    pub status_code: u16,

    /// Human readable multi-line summary, or the fatal failure message.
    pub body: String,
}

impl Response {
    /// A successful response carrying the summary text.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body:        body,
        }
    }

    /// A fatal response carrying a single failure message.
    pub fn fatal(body: String) -> Self {
        Self {
            status_code: 500,
            body:        body,
        }
    }
}
