//! # Spotify Integration Module
//!
//! This module is the transport layer between the fetch orchestration and
//! the Spotify Web API. It defines the catalog contract the rest of the
//! application is written against and provides the production HTTP
//! implementation of that contract.
//!
//! ## Overview
//!
//! The orchestration layer never talks HTTP directly. It is generic over
//! [`CatalogApi`], a trait with one async method per remote resource, each
//! answering exactly one request with a typed response envelope. This module
//! supplies the production implementation; tests supply scripted fakes.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Fetch Orchestration Layer (retry, paging, batching, caching)
//!          ↓
//! Spotify Integration Layer
//!     ├── Catalog Contract (CatalogApi, ApiError, batch ceilings)
//!     └── HTTP Client (SpotifyClient)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### API Contract Module
//!
//! [`api`] - The seam the orchestration is built on:
//! - **Catalog Operations**: top artists/tracks, saved tracks/albums, and
//!   the three bulk-by-id lookups
//! - **Failure Model**: [`ApiError`] with transport, status, and
//!   malformed-body variants, classified into the backoff policy's failure
//!   kinds
//! - **Batch Ceilings**: the per-call id limits the remote API documents
//!   (50 artists, 20 albums, 100 audio features)
//!
//! ### Client Module
//!
//! [`client`] - The production transport:
//! - **Single-Request Semantics**: one HTTP GET per call, no hidden retries
//! - **Bearer Credential**: the externally issued access token on every
//!   request
//! - **Typed Decoding**: serde deserialization straight into the response
//!   envelopes, with decode failures surfacing as malformed responses
//!
//! ## Error Handling Philosophy
//!
//! The transport reports, the orchestration decides. A 429 here is just a
//! status; the backoff policy above turns it into a long recovery delay. A
//! decode failure here is just a malformed body; the retrying invoker above
//! decides it is not worth another attempt.
//!
//! ## API Coverage
//!
//! ### User Rankings
//! - `GET /me/top/artists` - top artists for a ranking window
//! - `GET /me/top/tracks` - top tracks for a ranking window
//!
//! ### User Library
//! - `GET /me/tracks` - saved tracks with pagination
//! - `GET /me/albums` - saved albums with pagination
//!
//! ### Bulk Lookups
//! - `GET /artists` - up to 50 artists per call
//! - `GET /albums` - up to 20 albums per call
//! - `GET /audio-features` - up to 100 feature records per call
//!
//! ## Authentication
//!
//! There is no OAuth machinery here. The access credential is produced by
//! external tooling, arrives through configuration, and is consumed as an
//! opaque string. An expired token surfaces as a fatal 401 after one
//! attempt budget rather than triggering a refresh flow.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde** - typed deserialization of response envelopes
//! - **thiserror** - the transport failure enum

pub mod api;
pub mod client;

pub use api::{
    ApiError, CatalogApi, MAX_IDS_PER_ALBUM_CALL, MAX_IDS_PER_ARTIST_CALL,
    MAX_IDS_PER_AUDIO_FEATURES_CALL,
};
pub use client::SpotifyClient;
