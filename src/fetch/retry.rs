use std::{future::Future, time::Duration};

use tokio::time::sleep;

use crate::{
    fetch::{FailureKind, FetchError, FetchObserver, FetchSettings},
    spotify::ApiError,
};

/// Delay applied between attempts after an ordinary failure.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Delay applied between attempts after a rate-limit failure. The Web API's
/// "too many requests" signal asks for a substantially longer recovery pause.
pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_millis(10_000);

/// Pure delay policy consulted between attempts.
///
/// Maps an attempt number and a failure classification to a decision of
/// whether another attempt is allowed and how long to wait before it.
/// Deterministic and side-effect free, so it can be tested in isolation.
/// Both delays are plain fields; tests shrink them to keep retry scenarios
/// fast.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    pub retry_delay: Duration,
    pub rate_limit_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        BackoffPolicy {
            retry_delay: DEFAULT_RETRY_DELAY,
            rate_limit_delay: DEFAULT_RATE_LIMIT_DELAY,
        }
    }
}

/// Outcome of one policy consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDecision {
    /// Whether another attempt is allowed.
    pub retry: bool,
    /// How long to wait before that attempt.
    pub delay: Duration,
}

impl BackoffPolicy {
    /// Decides whether attempt `attempt` (1-based) may be followed by
    /// another one, and with which delay.
    ///
    /// `max_attempts` is the total invocation budget, so another attempt is
    /// allowed exactly while `attempt < max_attempts`. Rate-limited failures
    /// receive the long delay regardless of the remaining budget; they are
    /// not granted extra attempts.
    pub fn decide(&self, attempt: u32, max_attempts: u32, kind: FailureKind) -> RetryDecision {
        let delay = match kind {
            FailureKind::RateLimited => self.rate_limit_delay,
            FailureKind::Transient | FailureKind::Fatal => self.retry_delay,
        };
        RetryDecision {
            retry: attempt < max_attempts,
            delay,
        }
    }
}

/// Invokes an async operation until it succeeds or the attempt budget is
/// exhausted.
///
/// The operation is a zero-argument closure producing a fresh future per
/// invocation. On failure the error is classified into a [`FailureKind`] and
/// the backoff policy is consulted; if another attempt is allowed, the
/// invoker sleeps the decided delay (non-blocking) and re-invokes. The
/// attempt number and budget travel as immutable arguments into every policy
/// consultation; no counter is shared between concurrent invocations.
///
/// # Attempt Convention
///
/// `settings.max_attempts` counts total invocations: the default 3 means one
/// initial try plus up to two retries. An always-failing operation is
/// invoked exactly `max_attempts` times. A budget of 0 still performs the
/// initial invocation.
///
/// # Malformed Responses
///
/// A response-shape failure short-circuits with
/// [`FetchError::MalformedResponse`] before the policy runs, consuming no
/// retry budget. Retrying cannot fix a shape mismatch.
///
/// # Observer Notices
///
/// After each failed attempt that will be retried, the observer receives the
/// remaining-attempt count. Exhaustion fails with
/// [`FetchError::ExhaustedRetries`] carrying the last underlying failure.
///
/// # Example
///
/// ```
/// let page = run_with_retry(
///     || client.saved_tracks(50, 0),
///     "saved tracks",
///     &settings,
///     &NoopObserver,
/// )
/// .await?;
/// ```
pub async fn run_with_retry<T, Op, Fut>(
    operation: Op,
    description: &str,
    settings: &FetchSettings,
    observer: &dyn FetchObserver,
) -> Result<T, FetchError>
where
    Op: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt: u32 = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(failure) if failure.is_malformed() => {
                return Err(FetchError::MalformedResponse {
                    operation: description.to_string(),
                    source: failure,
                });
            }
            Err(failure) => {
                let decision = settings
                    .backoff
                    .decide(attempt, settings.max_attempts, failure.kind());
                if !decision.retry {
                    return Err(FetchError::ExhaustedRetries {
                        operation: description.to_string(),
                        attempts: attempt,
                        source: failure,
                    });
                }
                observer.notice(&format!(
                    "{}: attempt {} failed, {} attempts remaining",
                    description,
                    attempt,
                    settings.max_attempts - attempt
                ));
                sleep(decision.delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> BackoffPolicy {
        BackoffPolicy::default()
    }

    #[test]
    fn allows_retry_below_budget() {
        let decision = policy().decide(1, 3, FailureKind::Transient);
        assert!(decision.retry);

        let decision = policy().decide(2, 3, FailureKind::Transient);
        assert!(decision.retry);
    }

    #[test]
    fn denies_retry_at_budget() {
        let decision = policy().decide(3, 3, FailureKind::Transient);
        assert!(!decision.retry);

        // Past the budget stays denied.
        let decision = policy().decide(4, 3, FailureKind::Transient);
        assert!(!decision.retry);
    }

    #[test]
    fn transient_and_fatal_share_the_short_delay() {
        let policy = policy();
        assert_eq!(
            policy.decide(1, 3, FailureKind::Transient).delay,
            DEFAULT_RETRY_DELAY
        );
        assert_eq!(
            policy.decide(1, 3, FailureKind::Fatal).delay,
            DEFAULT_RETRY_DELAY
        );
    }

    #[test]
    fn rate_limit_waits_an_order_of_magnitude_longer() {
        let policy = policy();
        let limited = policy.decide(1, 3, FailureKind::RateLimited).delay;
        let transient = policy.decide(1, 3, FailureKind::Transient).delay;
        assert_eq!(limited, DEFAULT_RATE_LIMIT_DELAY);
        assert!(limited >= transient * 10);
    }

    #[test]
    fn rate_limit_gets_no_extra_attempts() {
        // The long delay does not extend the budget.
        let decision = policy().decide(3, 3, FailureKind::RateLimited);
        assert!(!decision.retry);
        assert_eq!(decision.delay, DEFAULT_RATE_LIMIT_DELAY);
    }

    #[test]
    fn decision_is_deterministic() {
        let policy = policy();
        let first = policy.decide(2, 5, FailureKind::Transient);
        let second = policy.decide(2, 5, FailureKind::Transient);
        assert_eq!(first, second);
    }
}
