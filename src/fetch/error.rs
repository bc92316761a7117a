use thiserror::Error;

use crate::spotify::ApiError;

/// Classification of a failed remote call, as consumed by the backoff policy.
///
/// The rate-limit signal (HTTP 429) is the only classification that changes
/// the retry delay; transient and fatal failures share the same short delay
/// and the same attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The remote API answered its documented "too many requests" signal.
    RateLimited,
    /// Network trouble or a server-side error that a later attempt may clear.
    Transient,
    /// A failure that further attempts are unlikely to clear.
    Fatal,
}

/// Terminal failure of an orchestrated fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying remote call failed repeatedly past the attempt budget.
    /// Carries the last raw failure. Never retried further up the chain.
    #[error("{operation} failed after {attempts} attempts: {source}")]
    ExhaustedRetries {
        operation: String,
        attempts: u32,
        #[source]
        source: ApiError,
    },

    /// The remote response did not match the expected shape. Retrying cannot
    /// fix a shape mismatch, so this fails without consuming retry budget.
    #[error("{operation} returned an unusable response: {source}")]
    MalformedResponse {
        operation: String,
        #[source]
        source: ApiError,
    },
}

impl FetchError {
    /// The operation description the failure was recorded under.
    pub fn operation(&self) -> &str {
        match self {
            FetchError::ExhaustedRetries { operation, .. } => operation,
            FetchError::MalformedResponse { operation, .. } => operation,
        }
    }
}
