use std::collections::HashSet;

use crate::{
    fetch::{
        FetchError, FetchObserver, FetchSettings, NoopObserver, collect_pages, resolve_in_blocks,
        run_with_retry,
    },
    management::CollectionCache,
    spotify::{
        CatalogApi, MAX_IDS_PER_ALBUM_CALL, MAX_IDS_PER_ARTIST_CALL,
        MAX_IDS_PER_AUDIO_FEATURES_CALL,
    },
    types::{AlbumRow, ArtistRow, AudioFeatureRow, TrackRow},
    utils,
};

/// One data-delivery session over the user's library.
///
/// Owns the catalog transport, the fetch settings, and the collection cache.
/// Each collection method fetches on first call and answers from the cache
/// afterwards, handing out shared slices for the lifetime of the session;
/// derived collections (saved albums, saved artists) reuse the memoized
/// primaries instead of re-fetching them. Dropping the session drops the
/// cache, so a new delivery operation starts from nothing.
pub struct LibrarySession<A> {
    api: A,
    settings: FetchSettings,
    cache: CollectionCache,
    observer: Box<dyn FetchObserver>,
}

impl<A: CatalogApi> LibrarySession<A> {
    pub fn new(api: A, settings: FetchSettings) -> Self {
        LibrarySession {
            api,
            settings,
            cache: CollectionCache::new(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Replaces the no-op observer, e.g. with a terminal spinner.
    pub fn with_observer(mut self, observer: impl FetchObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// The user's top artists for the session's time range. One bounded
    /// call, not paginated.
    pub async fn top_artists(&self) -> Result<&[ArtistRow], FetchError> {
        self.cache
            .top_artists
            .get_or_fetch(|| async {
                let page = run_with_retry(
                    || {
                        self.api
                            .top_artists(self.settings.time_range, self.settings.top_limit)
                    },
                    "top artists",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;
                Ok(page.items.into_iter().map(ArtistRow::from).collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// The user's top tracks for the session's time range. One bounded
    /// call, not paginated.
    pub async fn top_tracks(&self) -> Result<&[TrackRow], FetchError> {
        self.cache
            .top_tracks
            .get_or_fetch(|| async {
                let page = run_with_retry(
                    || {
                        self.api
                            .top_tracks(self.settings.time_range, self.settings.top_limit)
                    },
                    "top tracks",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;
                Ok(page.items.into_iter().map(TrackRow::from).collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Every saved track, decorated with its audio-feature attributes.
    pub async fn saved_tracks(&self) -> Result<&[TrackRow], FetchError> {
        self.cache
            .saved_tracks
            .get_or_fetch(|| async {
                let mut rows: Vec<TrackRow> = collect_pages(
                    |limit, offset| self.api.saved_tracks(limit, offset),
                    TrackRow::from,
                    "saved tracks",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;

                let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
                let features = resolve_in_blocks(
                    &ids,
                    MAX_IDS_PER_AUDIO_FEATURES_CALL,
                    |block| self.api.audio_features(block),
                    |response| response.audio_features,
                    |features| features.map(AudioFeatureRow::from),
                    "audio features",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;

                // Both sequences derive from the same id list in the same
                // order, so index i of one describes index i of the other.
                for (row, features) in rows.iter_mut().zip(features) {
                    row.features = features;
                }

                Ok(rows)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Every album in the saved library: the paged saved-album endpoint
    /// unioned with albums referenced by saved tracks.
    pub async fn saved_albums(&self) -> Result<&[AlbumRow], FetchError> {
        self.cache
            .saved_albums
            .get_or_fetch(|| async {
                let mut rows: Vec<AlbumRow> = collect_pages(
                    |limit, offset| self.api.saved_albums(limit, offset),
                    AlbumRow::from,
                    "saved albums",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;

                // The paged endpoint only returns albums saved as albums;
                // individually saved tracks reference albums of their own.
                // Resolve the ones not already present.
                let saved_tracks = self.saved_tracks().await?;
                let known: HashSet<&str> = rows.iter().map(|row| row.id.as_str()).collect();
                let mut missing: Vec<String> = saved_tracks
                    .iter()
                    .map(|track| track.album_id.clone())
                    .filter(|id| !known.contains(id.as_str()))
                    .collect();
                utils::remove_duplicate_ids(&mut missing);

                let referenced = resolve_in_blocks(
                    &missing,
                    MAX_IDS_PER_ALBUM_CALL,
                    |block| self.api.several_albums(block),
                    |response| response.albums,
                    AlbumRow::from,
                    "albums from saved tracks",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await?;
                rows.extend(referenced);

                Ok(rows)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Every artist referenced by the saved library, resolved in bulk:
    /// distinct artist ids from saved albums and saved tracks, first-seen
    /// order.
    pub async fn saved_artists(&self) -> Result<&[ArtistRow], FetchError> {
        self.cache
            .saved_artists
            .get_or_fetch(|| async {
                let albums = self.saved_albums().await?;
                let tracks = self.saved_tracks().await?;
                let mut ids: Vec<String> = albums
                    .iter()
                    .filter_map(|album| album.artist_id.clone())
                    .chain(tracks.iter().filter_map(|track| track.artist_id.clone()))
                    .collect();
                utils::remove_duplicate_ids(&mut ids);

                resolve_in_blocks(
                    &ids,
                    MAX_IDS_PER_ARTIST_CALL,
                    |block| self.api.several_artists(block),
                    |response| response.artists,
                    ArtistRow::from,
                    "saved artists",
                    &self.settings,
                    self.observer.as_ref(),
                )
                .await
            })
            .await
            .map(Vec::as_slice)
    }
}
