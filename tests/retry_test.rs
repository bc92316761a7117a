use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};
use std::time::Duration;

use spotitab::fetch::{
    BackoffPolicy, FetchError, FetchObserver, FetchSettings, NoopObserver, run_with_retry,
};
use spotitab::spotify::ApiError;

// Helper function to create settings with shrunk backoff delays so retry
// scenarios stay fast.
fn fast_settings(max_attempts: u32) -> FetchSettings {
    FetchSettings {
        max_attempts,
        backoff: BackoffPolicy {
            retry_delay: Duration::from_millis(1),
            rate_limit_delay: Duration::from_millis(2),
        },
        ..FetchSettings::default()
    }
}

// Observer that records every notice for later inspection.
struct RecordingObserver {
    notices: Arc<Mutex<Vec<String>>>,
}

impl FetchObserver for RecordingObserver {
    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[tokio::test]
async fn test_successful_operation_invoked_once() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result = run_with_retry(
        || async {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ApiError>(42)
        },
        "answer",
        &fast_settings(3),
        &NoopObserver,
    )
    .await;

    assert_eq!(result.unwrap(), 42);

    // A success on the first try consumes exactly one invocation
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exhaustion_invokes_exactly_max_attempts() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result: Result<u32, _> = run_with_retry(
        || async {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Status { status: 503 })
        },
        "broken endpoint",
        &fast_settings(3),
        &NoopObserver,
    )
    .await;

    // The budget counts total invocations, not retries
    assert_eq!(call_count.load(Ordering::SeqCst), 3);

    match result {
        Err(FetchError::ExhaustedRetries {
            operation,
            attempts,
            ..
        }) => {
            assert_eq!(operation, "broken endpoint");
            assert_eq!(attempts, 3);
        }
        other => panic!("expected exhausted retries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_recovery_on_final_attempt() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result = run_with_retry(
        || async {
            let count = call_count_clone.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(42)
            }
        },
        "flaky endpoint",
        &fast_settings(3),
        &NoopObserver,
    )
    .await;

    // Two failures fit inside a budget of three
    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_malformed_response_short_circuits() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result: Result<u32, _> = run_with_retry(
        || async {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Malformed {
                detail: "items is not a list".to_string(),
            })
        },
        "shape mismatch",
        &fast_settings(3),
        &NoopObserver,
    )
    .await;

    // Shape mismatches are not retried; one invocation, no budget consumed
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert!(matches!(
        result,
        Err(FetchError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn test_rate_limited_shares_attempt_budget() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result: Result<u32, _> = run_with_retry(
        || async {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Status { status: 429 })
        },
        "throttled endpoint",
        &fast_settings(3),
        &NoopObserver,
    )
    .await;

    // The longer rate-limit delay grants no extra attempts
    assert_eq!(call_count.load(Ordering::SeqCst), 3);
    assert!(matches!(
        result,
        Err(FetchError::ExhaustedRetries { attempts: 3, .. })
    ));
}

#[tokio::test]
async fn test_observer_receives_remaining_attempts() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let notices = Arc::new(Mutex::new(Vec::new()));
    let observer = RecordingObserver {
        notices: notices.clone(),
    };

    let result = run_with_retry(
        || async {
            let count = call_count_clone.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(7)
            }
        },
        "flaky call",
        &fast_settings(3),
        &observer,
    )
    .await;

    assert_eq!(result.unwrap(), 7);

    // One notice per failed attempt that will be retried
    let notices = notices.lock().unwrap();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0], "flaky call: attempt 1 failed, 2 attempts remaining");
    assert_eq!(notices[1], "flaky call: attempt 2 failed, 1 attempts remaining");
}

#[tokio::test]
async fn test_zero_budget_still_invokes_once() {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    let result: Result<u32, _> = run_with_retry(
        || async {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Status { status: 500 })
        },
        "single shot",
        &fast_settings(0),
        &NoopObserver,
    )
    .await;

    // The initial invocation always happens
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert!(matches!(
        result,
        Err(FetchError::ExhaustedRetries { attempts: 1, .. })
    ));
}
