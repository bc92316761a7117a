//! # CLI Module
//!
//! This module provides the command-line interface layer for spotitab, a
//! connector that fetches a user's Spotify library and republishes it as
//! analytics-ready tables. It implements all user-facing commands and
//! coordinates between the library session, the fetch orchestration, and the
//! terminal/file output surfaces.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the connector's
//! functionality. It provides commands for:
//!
//! - **Table Rendering**: Fetching one collection and rendering it in the
//!   terminal
//! - **Full Export**: Fetching every collection through one session and
//!   writing JSON table files plus a manifest
//! - **Information Queries**: Collection composition, batch ceilings, and
//!   configuration status
//!
//! ## Commands
//!
//! ### Table Operations
//!
//! - [`tables`] - Fetches a single collection and prints it as a table, with
//!   optional overrides for the session defaults
//!
//! ### Export Operations
//!
//! - [`export`] - Runs all five collection workflows against one session so
//!   derived collections reuse the memoized primaries, then writes one JSON
//!   file per collection and a manifest
//!
//! ### Information Commands
//!
//! - [`info`] - Shows how each collection is composed and whether the
//!   environment carries the required configuration
//!
//! ## Architecture Design
//!
//! The CLI module sits at the top of the layered architecture:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Library Session, Collection Cache)
//!     ↓
//! Fetch Orchestration Layer (Retry, Paging, Batching)
//!     ↓
//! Spotify Integration Layer (HTTP Requests)
//! ```
//!
//! Each command builds the session from configuration and CLI overrides,
//! awaits the workflows it needs, and owns all terminal and file output. The
//! layers below never print; they report progress through the observer seam
//! and fail with typed errors.
//!
//! ## Error Handling Philosophy
//!
//! A workflow failure is terminal for the command that triggered it: the
//! command surfaces one red failure message through the `error!` macro and
//! exits with a non-zero code. Nothing partial is rendered or written, which
//! matches the orchestration layer's own no-partial-results contract.
//!
//! ## Progress and User Experience
//!
//! Long-running fetches report through an indicatif spinner wired into the
//! session as its fetch observer, so paging row ranges and retry notices
//! appear live in the terminal:
//!
//! - **Spinner Feedback**: One spinner per command, updated from observer
//!   notices
//! - **Success Confirmation**: Row counts and file paths on completion
//! - **Detailed Output**: Tables rendered with tabled, colored status macros
//!
//! ## Usage Patterns
//!
//! ### Rendering collections
//! ```bash
//! spotitab tables --collection saved-tracks
//! spotitab tables --collection top-artists --time-range long-term
//! spotitab tables --collection saved-albums --max-results 100
//! ```
//!
//! ### Exporting the library
//! ```bash
//! spotitab export                          # writes ./spotitab-export/
//! spotitab export --out /tmp/library      # custom directory
//! ```
//!
//! ### Checking configuration
//! ```bash
//! spotitab info --collections              # composition of each collection
//! spotitab info --config                   # environment and session defaults
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::management`] - The library session and its collection cache
//! - [`crate::fetch`] - Settings and the observer seam
//! - [`crate::spotify`] - The production catalog client
//! - [`crate::types`] - Collection kinds, rows, and table rows

mod export;
mod info;
mod progress;
mod tables;

pub use export::export;
pub use info::info;
pub use progress::SpinnerObserver;
pub use tables::tables;
