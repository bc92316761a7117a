use thiserror::Error;

use crate::{
    fetch::FailureKind,
    types::{
        Artist, AudioFeaturesResponse, Page, SavedAlbum, SavedTrack, SeveralAlbumsResponse,
        SeveralArtistsResponse, TimeRange, Track,
    },
};

/// The bulk-artist endpoint accepts at most this many ids per call.
pub const MAX_IDS_PER_ARTIST_CALL: usize = 50;

/// The bulk-album endpoint accepts at most this many ids per call.
pub const MAX_IDS_PER_ALBUM_CALL: usize = 20;

/// The audio-features endpoint accepts at most this many ids per call.
pub const MAX_IDS_PER_AUDIO_FEATURES_CALL: usize = 100;

/// Failure of a single remote call.
///
/// Carries enough to let the backoff policy distinguish the rate-limit
/// signal (HTTP 429) from other failures, and to let the retrying invoker
/// short-circuit on response-shape mismatches.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection trouble,
    /// timeout, protocol error).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("request rejected with HTTP status {status}")]
    Status { status: u16 },

    /// The response body did not deserialize into the expected shape.
    #[error("response body did not match the expected shape: {detail}")]
    Malformed { detail: String },
}

impl ApiError {
    /// Classifies the failure for the backoff policy.
    ///
    /// 429 is the rate-limit signal; 5xx and transport trouble are worth
    /// retrying; everything else is fatal.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Status { status: 429 } => FailureKind::RateLimited,
            ApiError::Status { status } if *status >= 500 => FailureKind::Transient,
            ApiError::Status { .. } => FailureKind::Fatal,
            ApiError::Http(_) => FailureKind::Transient,
            ApiError::Malformed { .. } => FailureKind::Fatal,
        }
    }

    /// The HTTP status behind the failure, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            ApiError::Http(err) => err.status().map(|s| s.as_u16()),
            ApiError::Malformed { .. } => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ApiError::Malformed { .. })
    }
}

/// The catalog operations the orchestration layer is built on.
///
/// One method per remote resource, each answering a single request with the
/// typed response envelope. Implementations perform no retrying, paging, or
/// batching themselves; the orchestration primitives own all of that. The
/// production implementation is [`crate::spotify::SpotifyClient`]; tests
/// substitute scripted fakes.
///
/// Bulk methods receive id lists already sized to the endpoint's ceiling
/// (see the `MAX_IDS_PER_*` constants); passing more ids than the ceiling is
/// a caller bug that the remote end will reject.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// `GET /me/top/artists` - the user's top artists for a ranking window.
    async fn top_artists(&self, time_range: TimeRange, limit: u32)
    -> Result<Page<Artist>, ApiError>;

    /// `GET /me/top/tracks` - the user's top tracks for a ranking window.
    async fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Page<Track>, ApiError>;

    /// `GET /me/tracks` - one page of the user's saved tracks.
    async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<Page<SavedTrack>, ApiError>;

    /// `GET /me/albums` - one page of the user's saved albums.
    async fn saved_albums(&self, limit: u32, offset: u32) -> Result<Page<SavedAlbum>, ApiError>;

    /// `GET /artists` - full artist objects for up to 50 ids.
    async fn several_artists(&self, ids: Vec<String>) -> Result<SeveralArtistsResponse, ApiError>;

    /// `GET /albums` - full album objects for up to 20 ids.
    async fn several_albums(&self, ids: Vec<String>) -> Result<SeveralAlbumsResponse, ApiError>;

    /// `GET /audio-features` - per-track feature records for up to 100 ids,
    /// with `null` slots for ids the catalog cannot resolve.
    async fn audio_features(&self, ids: Vec<String>) -> Result<AudioFeaturesResponse, ApiError>;
}
