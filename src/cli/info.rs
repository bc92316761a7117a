use crate::{
    config,
    fetch::FetchSettings,
    info,
    spotify::{MAX_IDS_PER_ALBUM_CALL, MAX_IDS_PER_ARTIST_CALL, MAX_IDS_PER_AUDIO_FEATURES_CALL},
    types::CollectionKind,
    warning,
};

/// Displays information about the available collections and the environment.
///
/// Provides a unified CLI interface for the two read-only queries the
/// connector supports: how each logical collection is composed, and whether
/// the runtime configuration is in place. The function accepts boolean flags
/// to determine what information to display.
///
/// # Arguments
///
/// * `collections` - Display the collection catalog with composition details
/// * `configuration` - Display environment status and session defaults
///
/// # Information Types
///
/// ## Collections (`--collections`)
/// Lists every collection the connector can deliver together with how it is
/// assembled: whether it pages, which bulk endpoints it joins in, and the
/// per-call id ceilings those endpoints enforce.
///
/// ## Configuration (`--config`)
/// Shows whether the two required environment variables are present and the
/// session defaults every fetch starts from. Values are never printed, only
/// presence, so the output is safe to share.
///
/// # Execution Priority
///
/// The function executes in priority order and returns after the first
/// match:
/// 1. Collection catalog (if `collections` is true)
/// 2. Configuration status (if `configuration` is true)
///
/// # Example Usage
///
/// ```bash
/// # List collections and their composition
/// spotitab info --collections
///
/// # Check the environment before a first export
/// spotitab info --config
/// ```
///
/// # Output Examples
///
/// **Collections:**
/// ```text
/// [o] top-artists: Top Artists - one bounded call, not paginated
/// [o] saved-tracks: Saved Tracks - paged, decorated with audio features (blocks of 100)
/// ```
///
/// **Configuration:**
/// ```text
/// [o] SPOTIFY_API_URL: set
/// [!] SPOTIFY_ACCESS_TOKEN: missing
/// ```
pub async fn info(collections: bool, configuration: bool) {
    if collections {
        for kind in CollectionKind::ALL {
            info!("{}: {} - {}", kind.slug(), kind.label(), composition(kind));
        }
        return;
    }

    if configuration {
        for (name, present) in [
            ("SPOTIFY_API_URL", config::api_url_configured()),
            ("SPOTIFY_ACCESS_TOKEN", config::access_token_configured()),
        ] {
            if present {
                info!("{}: set", name);
            } else {
                warning!("{}: missing", name);
            }
        }
        if !config::api_url_configured() || !config::access_token_configured() {
            warning!(
                "Set the missing variables in the environment or in the data-directory .env file."
            );
        }

        let defaults = FetchSettings::default();
        info!("Default time range: {}", defaults.time_range);
        info!(
            "Default max results per collection: {}",
            defaults.max_results
        );
        info!("Default page size: {}", defaults.page_size);
        info!("Default top-collection limit: {}", defaults.top_limit);
        info!("Attempt budget per remote call: {}", defaults.max_attempts);
        info!(
            "Retry delay: {} ms, rate-limit delay: {} ms",
            defaults.backoff.retry_delay.as_millis(),
            defaults.backoff.rate_limit_delay.as_millis()
        );
    }
}

/// How one collection is assembled from the fetch primitives.
fn composition(kind: CollectionKind) -> String {
    match kind {
        CollectionKind::TopArtists | CollectionKind::TopTracks => {
            "one bounded call, not paginated".to_string()
        }
        CollectionKind::SavedTracks => format!(
            "paged, decorated with audio features (blocks of {})",
            MAX_IDS_PER_AUDIO_FEATURES_CALL
        ),
        CollectionKind::SavedAlbums => format!(
            "paged, unioned with albums referenced by saved tracks (blocks of {})",
            MAX_IDS_PER_ALBUM_CALL
        ),
        CollectionKind::SavedArtists => format!(
            "artists referenced by saved albums and tracks (blocks of {})",
            MAX_IDS_PER_ARTIST_CALL
        ),
    }
}
