use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::fetch::FetchObserver;

/// Builds the spinner used for long-running fetch commands.
///
/// The spinner ticks on its own while requests are in flight and shows the
/// latest observer notice as its message. Callers keep the returned handle to
/// clear the spinner once the fetch settles.
pub fn fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Fetch observer that mirrors every notice onto a spinner.
///
/// Cloning a [`ProgressBar`] shares the underlying bar, so the command keeps
/// one handle for finishing while the session owns this adapter.
pub struct SpinnerObserver {
    bar: ProgressBar,
}

impl SpinnerObserver {
    pub fn new(bar: ProgressBar) -> Self {
        SpinnerObserver { bar }
    }
}

impl FetchObserver for SpinnerObserver {
    fn notice(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}
