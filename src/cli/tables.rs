use tabled::Table;

use crate::{
    cli::{SpinnerObserver, progress},
    config, error,
    fetch::FetchSettings,
    management::LibrarySession,
    spotify::SpotifyClient,
    success,
    types::{
        AlbumRow, AlbumTableRow, ArtistRow, ArtistTableRow, CollectionKind, TimeRange, TrackRow,
        TrackTableRow,
    },
    utils, warning,
};

/// Fetches one collection and renders it as a terminal table.
///
/// Builds a fresh library session from the configured environment, applies
/// any CLI overrides on top of the session defaults, runs the collection's
/// workflow, and prints the result with tabled. Derived collections pull in
/// their primaries automatically; `saved-artists` for example fetches saved
/// albums and saved tracks first and memoizes them inside the session.
///
/// # Arguments
///
/// * `collection` - Which logical collection to fetch
/// * `time_range` - Optional ranking window override for the top collections
/// * `page_size` - Optional page size override for paginated endpoints
/// * `max_results` - Optional cap override on accumulated rows
/// * `limit` - Optional request size override for the bounded top calls
///
/// # Behavior
///
/// A fetch failure terminates the command with a single error message; no
/// partial table is rendered. An empty collection prints a warning instead
/// of a bare table header.
pub async fn tables(
    collection: CollectionKind,
    time_range: Option<TimeRange>,
    page_size: Option<u32>,
    max_results: Option<u32>,
    limit: Option<u32>,
) {
    if !config::api_url_configured() || !config::access_token_configured() {
        error!("Environment is not configured. Run spotitab info --config for details.");
    }

    let mut settings = FetchSettings::default();
    if let Some(time_range) = time_range {
        settings.time_range = time_range;
    }
    if let Some(page_size) = page_size {
        settings.page_size = page_size;
    }
    if let Some(max_results) = max_results {
        settings.max_results = max_results;
    }
    if let Some(limit) = limit {
        settings.top_limit = limit;
    }

    let pb = progress::fetch_spinner(&format!("Fetching {}...", collection.label()));
    let session = LibrarySession::new(SpotifyClient::from_env(), settings)
        .with_observer(SpinnerObserver::new(pb.clone()));

    let rendered = match collection {
        CollectionKind::TopArtists => session
            .top_artists()
            .await
            .map(|rows| (rows.len(), Table::new(artist_table_rows(rows)))),
        CollectionKind::TopTracks => session
            .top_tracks()
            .await
            .map(|rows| (rows.len(), Table::new(track_table_rows(rows)))),
        CollectionKind::SavedTracks => session
            .saved_tracks()
            .await
            .map(|rows| (rows.len(), Table::new(track_table_rows(rows)))),
        CollectionKind::SavedAlbums => session
            .saved_albums()
            .await
            .map(|rows| (rows.len(), Table::new(album_table_rows(rows)))),
        CollectionKind::SavedArtists => session
            .saved_artists()
            .await
            .map(|rows| (rows.len(), Table::new(artist_table_rows(rows)))),
    };
    pb.finish_and_clear();

    match rendered {
        Ok((0, _)) => warning!("{} came back empty.", collection.label()),
        Ok((count, table)) => {
            println!("{}", table);
            success!("{} rows in {}.", count, collection.label());
        }
        Err(e) => error!("Failed to fetch {}: {}", collection.label(), e),
    }
}

fn artist_table_rows(rows: &[ArtistRow]) -> Vec<ArtistTableRow> {
    rows.iter()
        .map(|row| ArtistTableRow {
            name: row.name.clone(),
            followers: row.followers.to_string(),
            popularity: row.popularity.to_string(),
            genres: join_genres(&row.genre1, &row.genre2),
        })
        .collect()
}

fn track_table_rows(rows: &[TrackRow]) -> Vec<TrackTableRow> {
    rows.iter()
        .map(|row| TrackTableRow {
            name: row.name.clone(),
            artist: row.artist_name.clone().unwrap_or_else(|| "-".to_string()),
            duration: utils::format_duration_ms(row.duration_ms),
            tempo: row
                .features
                .as_ref()
                .map(|f| format!("{:.0}", f.tempo))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn album_table_rows(rows: &[AlbumRow]) -> Vec<AlbumTableRow> {
    rows.iter()
        .map(|row| AlbumTableRow {
            name: row.name.clone(),
            released: row.release_date.clone(),
            album_type: row.album_type.clone(),
            added: row.added_at.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn join_genres(genre1: &Option<String>, genre2: &Option<String>) -> String {
    let genres: Vec<&str> = [genre1.as_deref(), genre2.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if genres.is_empty() {
        "-".to_string()
    } else {
        genres.join(", ")
    }
}
