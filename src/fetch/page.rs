use std::future::Future;

use crate::{
    fetch::{FetchError, FetchObserver, FetchSettings, run_with_retry},
    spotify::ApiError,
    types::Page,
};

/// Collects every row of a paginated endpoint, in page order.
///
/// Drives `page_operation(limit, offset)` starting at offset 0 with
/// `limit = settings.page_size`, applying `process` to each raw item in
/// received order. Every page call is wrapped in the retrying invoker, so a
/// page only fails once its attempt budget is exhausted; that failure
/// propagates and no partial result is returned.
///
/// # Termination
///
/// The next offset is the server-reported page offset plus the page size.
/// Collection stops once the next offset reaches the server-reported total
/// or `settings.max_results`, whichever comes first, and the accumulated
/// rows are clamped to `max_results` so the cap is exact.
///
/// # Ordering
///
/// Pages are fetched strictly one after another; each request depends on the
/// previous response's offset and total, so two pages are never in flight at
/// once.
///
/// # Observer Notices
///
/// Before each page request the observer receives the row range about to be
/// fetched.
pub async fn collect_pages<Raw, Row, Op, Fut, P>(
    page_operation: Op,
    process: P,
    description: &str,
    settings: &FetchSettings,
    observer: &dyn FetchObserver,
) -> Result<Vec<Row>, FetchError>
where
    Op: Fn(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<Raw>, ApiError>>,
    P: Fn(Raw) -> Row,
{
    let mut rows: Vec<Row> = Vec::new();
    let mut offset: u32 = 0;

    loop {
        observer.notice(&format!(
            "{}: fetching rows {} to {}",
            description,
            offset,
            offset + settings.page_size - 1
        ));

        let page = run_with_retry(
            || page_operation(settings.page_size, offset),
            description,
            settings,
            observer,
        )
        .await?;

        let page_offset = page.offset;
        let total = page.total;
        rows.extend(page.items.into_iter().map(&process));

        let next_offset = page_offset + settings.page_size;
        if next_offset >= total || next_offset >= settings.max_results {
            break;
        }
        offset = next_offset;
    }

    rows.truncate(settings.max_results as usize);
    Ok(rows)
}
