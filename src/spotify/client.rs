use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    spotify::{ApiError, CatalogApi},
    types::{
        Artist, AudioFeaturesResponse, Page, SavedAlbum, SavedTrack, SeveralAlbumsResponse,
        SeveralArtistsResponse, TimeRange, Track,
    },
};

/// Production catalog transport over the Spotify Web API.
///
/// Holds one reqwest client, the API base URL, and the bearer credential,
/// and answers exactly one HTTP request per trait method. All resilience
/// (retrying, rate-limit pacing) lives in the fetch layer above; this type
/// only translates outcomes into [`ApiError`].
///
/// # Response Handling
///
/// - Transport failures surface as `ApiError::Http`
/// - Non-success statuses surface as `ApiError::Status` so the backoff
///   policy can recognize 429
/// - Bodies that fail to deserialize surface as `ApiError::Malformed`,
///   which the retrying invoker treats as non-retriable
///
/// # Credential
///
/// The access token is consumed as an opaque string; obtaining and
/// refreshing it is the job of external tooling. A 401 from an expired
/// token classifies as fatal and surfaces to the user after one attempt
/// budget.
///
/// # Example
///
/// ```
/// let client = SpotifyClient::from_env();
/// let page = client.saved_tracks(50, 0).await?;
/// ```
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(base_url: String, token: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            base_url,
            token,
        }
    }

    /// Builds a client from `SPOTIFY_API_URL` and `SPOTIFY_ACCESS_TOKEN`.
    ///
    /// # Panics
    ///
    /// Panics if either variable is unset; run `spotitab info --config` to
    /// check the environment first.
    pub fn from_env() -> Self {
        SpotifyClient::new(config::spotify_apiurl(), config::spotify_access_token())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(err) if err.is_decode() => Err(ApiError::Malformed {
                detail: err.to_string(),
            }),
            Err(err) => Err(ApiError::Http(err)),
        }
    }
}

impl CatalogApi for SpotifyClient {
    async fn top_artists(
        &self,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Page<Artist>, ApiError> {
        self.get_json(
            "/me/top/artists",
            &[
                ("time_range", time_range.as_param().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Page<Track>, ApiError> {
        self.get_json(
            "/me/top/tracks",
            &[
                ("time_range", time_range.as_param().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<Page<SavedTrack>, ApiError> {
        self.get_json(
            "/me/tracks",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    async fn saved_albums(&self, limit: u32, offset: u32) -> Result<Page<SavedAlbum>, ApiError> {
        self.get_json(
            "/me/albums",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    async fn several_artists(&self, ids: Vec<String>) -> Result<SeveralArtistsResponse, ApiError> {
        self.get_json("/artists", &[("ids", ids.join(","))]).await
    }

    async fn several_albums(&self, ids: Vec<String>) -> Result<SeveralAlbumsResponse, ApiError> {
        self.get_json("/albums", &[("ids", ids.join(","))]).await
    }

    async fn audio_features(&self, ids: Vec<String>) -> Result<AudioFeaturesResponse, ApiError> {
        self.get_json("/audio-features", &[("ids", ids.join(","))])
            .await
    }
}
