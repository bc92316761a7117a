use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

use spotitab::fetch::{BackoffPolicy, FetchError, FetchSettings, NoopObserver, resolve_in_blocks};
use spotitab::spotify::ApiError;

// Helper function to create settings with fast backoff delays.
fn fast_settings(max_attempts: u32) -> FetchSettings {
    FetchSettings {
        max_attempts,
        backoff: BackoffPolicy {
            retry_delay: Duration::from_millis(1),
            rate_limit_delay: Duration::from_millis(1),
        },
        ..FetchSettings::default()
    }
}

// Helper function to create a numbered id list.
fn make_ids(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("id-{:02}", n)).collect()
}

#[tokio::test]
async fn test_partitions_ids_into_contiguous_blocks() {
    let ids = make_ids(12);
    let blocks = Arc::new(Mutex::new(Vec::new()));
    let blocks_clone = blocks.clone();

    let rows = resolve_in_blocks(
        &ids,
        5,
        |block| {
            blocks_clone.lock().unwrap().push(block.clone());
            async move { Ok::<_, ApiError>(block) }
        },
        |resp| resp,
        |id| id,
        "echo",
        &fast_settings(3),
        &NoopObserver,
    )
    .await
    .unwrap();

    // Twelve ids at a ceiling of five make three blocks, the last one short.
    // Blocks run concurrently, so compare them sorted by their first id.
    let mut blocks = blocks.lock().unwrap().clone();
    blocks.sort();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], ids[0..5]);
    assert_eq!(blocks[1], ids[5..10]);
    assert_eq!(blocks[2], ids[10..12]);

    // The concatenated rows reproduce the input id list
    assert_eq!(rows, ids);
}

#[tokio::test]
async fn test_output_order_survives_adversarial_completion() {
    let ids = make_ids(15);
    let completions = Arc::new(Mutex::new(Vec::new()));
    let completions_clone = completions.clone();

    let rows = resolve_in_blocks(
        &ids,
        5,
        |block| {
            let completions = completions_clone.clone();
            async move {
                // Later blocks answer sooner than earlier ones
                let index: u64 = block[0][3..].parse().unwrap();
                sleep(Duration::from_millis(30 - index * 2)).await;
                completions.lock().unwrap().push(block[0].clone());
                Ok::<_, ApiError>(block)
            }
        },
        |resp| resp,
        |id| id,
        "echo",
        &fast_settings(3),
        &NoopObserver,
    )
    .await
    .unwrap();

    // Blocks really did settle back to front
    assert_eq!(
        *completions.lock().unwrap(),
        vec!["id-10".to_string(), "id-05".to_string(), "id-00".to_string()]
    );

    // Output order still equals input order
    assert_eq!(rows, ids);
}

#[tokio::test]
async fn test_failing_block_fails_whole_resolve() {
    let ids = make_ids(15);

    let result = resolve_in_blocks(
        &ids,
        5,
        |block| async move {
            if block.contains(&"id-05".to_string()) {
                Err(ApiError::Status { status: 500 })
            } else {
                // Healthy blocks linger so the failure settles first
                sleep(Duration::from_millis(20)).await;
                Ok(block)
            }
        },
        |resp: Vec<String>| resp,
        |id| id,
        "echo",
        &fast_settings(1),
        &NoopObserver,
    )
    .await;

    // One exhausted block fails the whole resolve; no partial rows
    assert!(matches!(
        result,
        Err(FetchError::ExhaustedRetries { attempts: 1, .. })
    ));
}

#[tokio::test]
async fn test_empty_id_list_resolves_without_calls() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let calls_clone = calls.clone();

    let rows = resolve_in_blocks(
        &[],
        5,
        |block: Vec<String>| {
            calls_clone.lock().unwrap().push(block.clone());
            async move { Ok::<_, ApiError>(block) }
        },
        |resp| resp,
        |id| id,
        "echo",
        &fast_settings(3),
        &NoopObserver,
    )
    .await
    .unwrap();

    // Nothing to resolve, nothing sent
    assert!(rows.is_empty());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_single_short_block() {
    let ids = make_ids(3);
    let blocks = Arc::new(Mutex::new(Vec::new()));
    let blocks_clone = blocks.clone();

    let rows = resolve_in_blocks(
        &ids,
        50,
        |block| {
            blocks_clone.lock().unwrap().push(block.clone());
            async move { Ok::<_, ApiError>(block) }
        },
        |resp| resp,
        |id| format!("row-{}", id),
        "echo",
        &fast_settings(3),
        &NoopObserver,
    )
    .await
    .unwrap();

    // Fewer ids than the ceiling make exactly one call
    assert_eq!(blocks.lock().unwrap().len(), 1);

    // The processor runs once per extracted item
    assert_eq!(
        rows,
        vec![
            "row-id-00".to_string(),
            "row-id-01".to_string(),
            "row-id-02".to_string()
        ]
    );
}
