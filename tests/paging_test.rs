use std::sync::{Arc, Mutex};
use std::time::Duration;

use spotitab::fetch::{BackoffPolicy, FetchError, FetchSettings, NoopObserver, collect_pages};
use spotitab::spotify::ApiError;
use spotitab::types::Page;

// Helper function to create settings with the given paging shape and fast
// backoff delays.
fn paging_settings(page_size: u32, max_results: u32) -> FetchSettings {
    FetchSettings {
        page_size,
        max_results,
        backoff: BackoffPolicy {
            retry_delay: Duration::from_millis(1),
            rate_limit_delay: Duration::from_millis(1),
        },
        ..FetchSettings::default()
    }
}

// Helper function to build one page of a synthetic numbered collection.
fn number_page(total: u32, limit: u32, offset: u32) -> Page<u32> {
    let end = (offset + limit).min(total);
    Page {
        items: (offset..end).collect(),
        offset,
        total,
    }
}

#[tokio::test]
async fn test_collects_every_page_in_order() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_clone = offsets.clone();

    let rows = collect_pages(
        |limit, offset| {
            offsets_clone.lock().unwrap().push(offset);
            let page = number_page(125, limit, offset);
            async move { Ok::<_, ApiError>(page) }
        },
        |n: u32| n,
        "numbers",
        &paging_settings(50, 1000),
        &NoopObserver,
    )
    .await
    .unwrap();

    // Three pages cover a total of 125 at page size 50
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50, 100]);

    // Every row arrives exactly once, in page order
    assert_eq!(rows.len(), 125);
    assert_eq!(rows, (0..125).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_clamps_to_max_results() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_clone = offsets.clone();

    let rows = collect_pages(
        |limit, offset| {
            offsets_clone.lock().unwrap().push(offset);
            let page = number_page(1000, limit, offset);
            async move { Ok::<_, ApiError>(page) }
        },
        |n: u32| n,
        "numbers",
        &paging_settings(50, 120),
        &NoopObserver,
    )
    .await
    .unwrap();

    // The cap stops paging after the page that crosses it
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50, 100]);

    // The accumulated rows are clamped exactly to the cap
    assert_eq!(rows.len(), 120);
    assert_eq!(rows[119], 119);
}

#[tokio::test]
async fn test_empty_collection_stops_after_one_call() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_clone = offsets.clone();

    let rows = collect_pages(
        |limit, offset| {
            offsets_clone.lock().unwrap().push(offset);
            let page = number_page(0, limit, offset);
            async move { Ok::<_, ApiError>(page) }
        },
        |n: u32| n,
        "numbers",
        &paging_settings(50, 500),
        &NoopObserver,
    )
    .await
    .unwrap();

    // An empty collection still costs the initial probe, nothing more
    assert_eq!(*offsets.lock().unwrap(), vec![0]);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_exact_page_boundary() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_clone = offsets.clone();

    let rows = collect_pages(
        |limit, offset| {
            offsets_clone.lock().unwrap().push(offset);
            let page = number_page(100, limit, offset);
            async move { Ok::<_, ApiError>(page) }
        },
        |n: u32| n,
        "numbers",
        &paging_settings(50, 500),
        &NoopObserver,
    )
    .await
    .unwrap();

    // A total that divides evenly does not trigger a trailing empty request
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50]);
    assert_eq!(rows.len(), 100);
}

#[tokio::test]
async fn test_page_failure_propagates_after_retries() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_clone = offsets.clone();

    let settings = FetchSettings {
        max_attempts: 2,
        ..paging_settings(50, 500)
    };

    let result = collect_pages(
        |limit, offset| {
            offsets_clone.lock().unwrap().push(offset);
            let outcome = if offset >= 50 {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(number_page(1000, limit, offset))
            };
            async move { outcome }
        },
        |n: u32| n,
        "numbers",
        &settings,
        &NoopObserver,
    )
    .await;

    // The first page succeeds once; the second burns its whole budget
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50, 50]);

    // No partial result survives a failed page
    match result {
        Err(FetchError::ExhaustedRetries { attempts, .. }) => assert_eq!(attempts, 2),
        other => panic!("expected exhausted retries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_processor_projects_each_row() {
    let rows = collect_pages(
        |limit, offset| {
            let page = number_page(30, limit, offset);
            async move { Ok::<_, ApiError>(page) }
        },
        |n: u32| format!("row-{}", n),
        "numbers",
        &paging_settings(50, 500),
        &NoopObserver,
    )
    .await
    .unwrap();

    // The processor runs once per raw item, in order
    assert_eq!(rows.len(), 30);
    assert_eq!(rows[0], "row-0");
    assert_eq!(rows[29], "row-29");
}
