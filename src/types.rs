use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The closed set of logical collections this connector can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CollectionKind {
    TopArtists,
    TopTracks,
    SavedTracks,
    SavedAlbums,
    SavedArtists,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::TopArtists,
        CollectionKind::TopTracks,
        CollectionKind::SavedTracks,
        CollectionKind::SavedAlbums,
        CollectionKind::SavedArtists,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::TopArtists => "Top Artists",
            CollectionKind::TopTracks => "Top Tracks",
            CollectionKind::SavedTracks => "Saved Tracks",
            CollectionKind::SavedAlbums => "Saved Albums",
            CollectionKind::SavedArtists => "Saved Artists",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CollectionKind::TopArtists => "top-artists",
            CollectionKind::TopTracks => "top-tracks",
            CollectionKind::SavedTracks => "saved-tracks",
            CollectionKind::SavedAlbums => "saved-albums",
            CollectionKind::SavedArtists => "saved-artists",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Ranking window for the top-artists and top-tracks endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeRange {
    #[default]
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    /// The query-parameter spelling the Web API expects.
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

/// One bounded slice of a larger result set. `offset` and `total` describe
/// the position within the server-side collection; bodies that omit them
/// default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub href: String,
    pub uri: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Simplified artist object as embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub href: String,
    pub uri: String,
    pub duration_ms: u64,
    pub explicit: bool,
    #[serde(default)]
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: String,
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub href: String,
    pub uri: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub images: Vec<Image>,
    pub release_date: String,
    pub album_type: String,
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub added_at: String,
    pub album: Album,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralAlbumsResponse {
    pub albums: Vec<Album>,
}

/// The features endpoint answers with `null` slots for ids it cannot
/// resolve, so the list is optional element-wise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRow {
    pub followers: u64,
    pub genre1: Option<String>,
    pub genre2: Option<String>,
    pub href: String,
    pub id: String,
    pub image_link: Option<String>,
    pub name: String,
    pub popularity: u32,
    pub uri: String,
}

impl From<Artist> for ArtistRow {
    fn from(artist: Artist) -> Self {
        let mut genres = artist.genres.into_iter();
        ArtistRow {
            followers: artist.followers.map(|f| f.total).unwrap_or(0),
            genre1: genres.next(),
            genre2: genres.next(),
            href: artist.href,
            id: artist.id,
            image_link: artist.images.into_iter().next().map(|i| i.url),
            name: artist.name,
            popularity: artist.popularity,
            uri: artist.uri,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatureRow {
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: i32,
}

impl From<AudioFeatures> for AudioFeatureRow {
    fn from(features: AudioFeatures) -> Self {
        AudioFeatureRow {
            danceability: features.danceability,
            energy: features.energy,
            key: features.key,
            loudness: features.loudness,
            mode: features.mode,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            valence: features.valence,
            tempo: features.tempo,
            time_signature: features.time_signature,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRow {
    pub album_id: String,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    pub duration_ms: u64,
    pub explicit: bool,
    pub href: String,
    pub id: String,
    pub name: String,
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    // Audio-feature attributes are inlined into the row once resolved.
    #[serde(flatten)]
    pub features: Option<AudioFeatureRow>,
}

impl From<Track> for TrackRow {
    fn from(track: Track) -> Self {
        let (artist_id, artist_name) = track
            .artists
            .into_iter()
            .next()
            .map(|a| (a.id, a.name))
            .unzip();
        TrackRow {
            album_id: track.album.id,
            artist_id,
            artist_name,
            duration_ms: track.duration_ms,
            explicit: track.explicit,
            href: track.href,
            id: track.id,
            name: track.name,
            preview_url: track.preview_url,
            track_number: track.track_number,
            uri: track.uri,
            added_at: None,
            features: None,
        }
    }
}

impl From<SavedTrack> for TrackRow {
    fn from(saved: SavedTrack) -> Self {
        let mut row = TrackRow::from(saved.track);
        row.added_at = Some(saved.added_at);
        row
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    pub artist_id: Option<String>,
    pub genre1: Option<String>,
    pub genre2: Option<String>,
    pub href: String,
    pub id: String,
    pub image_link: Option<String>,
    pub name: String,
    pub popularity: u32,
    pub release_date: String,
    #[serde(rename = "type")]
    pub album_type: String,
    pub uri: String,
}

impl From<Album> for AlbumRow {
    fn from(album: Album) -> Self {
        let mut genres = album.genres.into_iter();
        AlbumRow {
            added_at: None,
            artist_id: album.artists.into_iter().next().map(|a| a.id),
            genre1: genres.next(),
            genre2: genres.next(),
            href: album.href,
            id: album.id,
            image_link: album.images.into_iter().next().map(|i| i.url),
            name: album.name,
            popularity: album.popularity,
            release_date: album.release_date,
            album_type: album.album_type,
            uri: album.uri,
        }
    }
}

impl From<SavedAlbum> for AlbumRow {
    fn from(saved: SavedAlbum) -> Self {
        let mut row = AlbumRow::from(saved.album);
        row.added_at = Some(saved.added_at);
        row
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub followers: String,
    pub popularity: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub duration: String,
    pub tempo: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub released: String,
    pub album_type: String,
    pub added: String,
}
