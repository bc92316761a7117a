use std::future::Future;

use futures::{StreamExt, stream::FuturesUnordered};

use crate::{
    fetch::{FetchError, FetchObserver, FetchSettings, run_with_retry},
    spotify::ApiError,
};

/// Resolves an arbitrary-length id list against a batch-limited endpoint.
///
/// Partitions `ids` into contiguous blocks of at most `block_size` (the last
/// block may be shorter) and issues one retry-wrapped `batch_operation` call
/// per block, all concurrently in flight. `extract` pulls the raw item list
/// out of the endpoint's response envelope and `process` maps each raw item
/// to a row.
///
/// # Ordering
///
/// Each block call is started with the index of its slot and writes its rows
/// into exactly that slot; completion order never determines placement. Once
/// every block has settled, the slots are concatenated in index order, so
/// the output order equals the input id order (and, absent server-side
/// filtering, the lengths match too).
///
/// # Failure
///
/// If any block exhausts its retries, the whole resolve fails with that
/// error; outstanding block futures are dropped and partially completed
/// blocks are discarded. An empty id list resolves to an empty row list
/// without touching the network.
///
/// # Concurrency
///
/// The block futures are polled from a single task, so slot bookkeeping
/// never interleaves mid-write and needs no locking.
pub async fn resolve_in_blocks<Resp, Raw, Row, Op, Fut, Ext, P>(
    ids: &[String],
    block_size: usize,
    batch_operation: Op,
    extract: Ext,
    process: P,
    description: &str,
    settings: &FetchSettings,
    observer: &dyn FetchObserver,
) -> Result<Vec<Row>, FetchError>
where
    Op: Fn(Vec<String>) -> Fut,
    Fut: Future<Output = Result<Resp, ApiError>>,
    Ext: Fn(Resp) -> Vec<Raw>,
    P: Fn(Raw) -> Row,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let blocks: Vec<Vec<String>> = ids.chunks(block_size).map(|block| block.to_vec()).collect();
    let block_count = blocks.len();
    observer.notice(&format!(
        "{}: resolving {} ids in {} blocks",
        description,
        ids.len(),
        block_count
    ));

    let batch_operation = &batch_operation;
    let mut in_flight: FuturesUnordered<_> = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| async move {
            let outcome = run_with_retry(
                || batch_operation(block.clone()),
                description,
                settings,
                observer,
            )
            .await;
            (index, outcome)
        })
        .collect();

    // Every settled block lands in the slot it was started with.
    let mut slots: Vec<Option<Vec<Row>>> = Vec::with_capacity(block_count);
    slots.resize_with(block_count, || None);
    while let Some((index, outcome)) = in_flight.next().await {
        let response = outcome?;
        slots[index] = Some(extract(response).into_iter().map(&process).collect());
    }

    // The drain loop only finishes once every slot is filled.
    let mut merged: Vec<Row> = Vec::with_capacity(ids.len());
    for block_rows in slots.into_iter().flatten() {
        merged.extend(block_rows);
    }
    Ok(merged)
}
