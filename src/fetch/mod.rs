//! # Fetch Orchestration Module
//!
//! This module contains the orchestration primitives that turn a handful of
//! paginated, rate-limited Web API endpoints into complete, correctly ordered
//! in-memory collections. Everything above it (the library session, the CLI)
//! composes these primitives; everything below it (the HTTP client) only
//! answers single requests.
//!
//! ## Overview
//!
//! Four primitives cooperate:
//!
//! ```text
//! Library Session (management)
//!          ↓
//! Fetch Orchestration Layer
//!     ├── Retrying Invoker  (run_with_retry + BackoffPolicy)
//!     ├── Paged Collector   (collect_pages)
//!     ├── Batched Resolver  (resolve_in_blocks)
//!     └── Cache Slots       (CacheSlot)
//!          ↓
//! Catalog Transport (spotify::CatalogApi)
//! ```
//!
//! ## Core Modules
//!
//! ### Retry Module
//!
//! [`retry`] - The retrying invoker and its backoff policy:
//! - **Pure Policy**: `BackoffPolicy::decide` maps an attempt number and a
//!   failure classification to a retry decision and delay, with no side
//!   effects
//! - **Loop-Based Invoker**: `run_with_retry` re-invokes a zero-argument
//!   async operation until success or budget exhaustion
//! - **Rate-Limit Awareness**: HTTP 429 failures wait substantially longer
//!   before the next attempt but consume the same budget
//! - **Malformed Short-Circuit**: shape mismatches fail immediately without
//!   consuming retry budget, since retrying cannot fix them
//!
//! ### Page Module
//!
//! [`page`] - Sequential offset-driven collection of a paginated endpoint:
//! - **Strict Ordering**: pages are fetched one after another; each request
//!   depends on the previous response's offset and total
//! - **Result Capping**: collection stops once the next offset reaches the
//!   server total or the configured maximum, and the accumulated rows are
//!   clamped to that maximum
//!
//! ### Batch Module
//!
//! [`batch`] - Bulk resolution of id-keyed lookups:
//! - **Block Partitioning**: ids are split into contiguous blocks sized to
//!   the endpoint's maximum ids per call
//! - **Concurrent Blocks**: all block requests are in flight at once, each
//!   wrapped in the retrying invoker
//! - **Indexed Reassembly**: every block writes into the slot it was started
//!   with, so output order always equals input order
//! - **Fail-Fast**: the first exhausted block fails the whole resolve and
//!   cancels outstanding blocks
//!
//! ### Cache Module
//!
//! [`cache`] - Session-lifetime memoization:
//! - **Store On Success**: a slot is populated only by a fully successful
//!   fetch; failures leave it empty so the next caller retries
//! - **Coalescing**: concurrent first callers share one in-flight fetch
//! - **Immutable Entries**: populated slots hand out shared references for
//!   the rest of the session
//!
//! ## Error Types
//!
//! All primitives fail with [`FetchError`]: either `ExhaustedRetries`
//! (carrying the last transport failure) or `MalformedResponse`. Transport
//! failures are classified into [`FailureKind`] to drive the backoff policy.
//!
//! ## Observability
//!
//! Long-running operations report free-text progress (row ranges, remaining
//! attempts, block counts) to an injected [`FetchObserver`]; the default
//! [`NoopObserver`] discards everything. Notices are informational only and
//! never part of the success or failure contract.

pub mod batch;
pub mod cache;
pub mod error;
pub mod observe;
pub mod page;
pub mod retry;
pub mod settings;

pub use batch::resolve_in_blocks;
pub use cache::CacheSlot;
pub use error::{FailureKind, FetchError};
pub use observe::{FetchObserver, NoopObserver};
pub use page::collect_pages;
pub use retry::{BackoffPolicy, RetryDecision, run_with_retry};
pub use settings::FetchSettings;
