use std::future::Future;

use tokio::sync::OnceCell;

use crate::fetch::FetchError;

/// Session-lifetime memoization for one logical collection.
///
/// A slot is populated by the first successful fetch and hands out shared
/// references from then on; the entry is immutable for the rest of the
/// session. A failed fetch stores nothing, so the next caller re-runs the
/// whole workflow. Concurrent first callers coalesce: late arrivals wait for
/// the in-flight fetch instead of starting their own, and if it fails one of
/// the waiters takes over.
pub struct CacheSlot<T> {
    cell: OnceCell<T>,
}

impl<T> CacheSlot<T> {
    pub fn new() -> Self {
        CacheSlot {
            cell: OnceCell::new(),
        }
    }

    /// Returns the stored value without fetching, if the slot is populated.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Returns the stored value, or runs `fetch` and stores its result.
    ///
    /// The stored reference stays valid for the lifetime of the slot. Errors
    /// pass through unchanged and leave the slot empty.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<&T, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        self.cell.get_or_try_init(fetch).await
    }
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        CacheSlot::new()
    }
}
