/// Receiver for free-text progress notices emitted while a fetch runs.
///
/// Notices carry information like row ranges during paging and remaining
/// attempts during retries. They are purely informational; nothing in the
/// success or failure contract depends on them.
pub trait FetchObserver {
    fn notice(&self, message: &str);
}

/// Observer that discards every notice. The default for sessions that have
/// no interactive surface, and for tests.
pub struct NoopObserver;

impl FetchObserver for NoopObserver {
    fn notice(&self, _message: &str) {}
}
