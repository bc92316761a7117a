use crate::{fetch::BackoffPolicy, types::TimeRange};

/// Rows requested per page while collecting a paginated endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Cap on the accumulated rows of any single collection.
pub const DEFAULT_MAX_RESULTS: u32 = 500;

/// Bounded request size for the non-paginated top-artists/top-tracks calls.
pub const DEFAULT_TOP_LIMIT: u32 = 50;

/// Total invocation budget per remote operation (initial try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tunable parameters of one fetch session.
///
/// A session holds exactly one of these; every workflow, page loop, and
/// batch resolve reads from it. The defaults mirror the connector's
/// long-standing behavior; tests shrink the backoff delays to keep retry
/// scenarios fast.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Page size for paginated endpoints. Must be at least 1.
    pub page_size: u32,
    /// Hard cap on accumulated rows per collection; the collector clamps
    /// exactly to this value.
    pub max_results: u32,
    /// Request size for the single bounded top-artists/top-tracks calls.
    pub top_limit: u32,
    /// Total invocations allowed per remote operation. 3 means one initial
    /// try plus up to two retries.
    pub max_attempts: u32,
    /// Ranking window applied to the top-artists/top-tracks endpoints.
    pub time_range: TimeRange,
    /// Delay policy consulted between attempts.
    pub backoff: BackoffPolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        FetchSettings {
            page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
            top_limit: DEFAULT_TOP_LIMIT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            time_range: TimeRange::default(),
            backoff: BackoffPolicy::default(),
        }
    }
}
