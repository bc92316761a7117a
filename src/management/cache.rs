use crate::{
    fetch::CacheSlot,
    types::{AlbumRow, ArtistRow, TrackRow},
};

/// One memoization slot per logical collection, owned by a single session.
///
/// Slots are populated independently and only by fully successful workflow
/// runs; a new session starts with a fresh, empty cache.
pub struct CollectionCache {
    pub top_artists: CacheSlot<Vec<ArtistRow>>,
    pub top_tracks: CacheSlot<Vec<TrackRow>>,
    pub saved_tracks: CacheSlot<Vec<TrackRow>>,
    pub saved_albums: CacheSlot<Vec<AlbumRow>>,
    pub saved_artists: CacheSlot<Vec<ArtistRow>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        CollectionCache {
            top_artists: CacheSlot::new(),
            top_tracks: CacheSlot::new(),
            saved_tracks: CacheSlot::new(),
            saved_albums: CacheSlot::new(),
            saved_artists: CacheSlot::new(),
        }
    }
}

impl Default for CollectionCache {
    fn default() -> Self {
        CollectionCache::new()
    }
}
