use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::{
    Res,
    cli::{SpinnerObserver, progress},
    config, error,
    fetch::FetchSettings,
    management::LibrarySession,
    spotify::SpotifyClient,
    success,
    types::{CollectionKind, TimeRange},
};

/// One exported table, as recorded in the manifest and the summary output.
#[derive(Serialize, Tabled)]
struct ExportEntry {
    collection: String,
    rows: usize,
    file: String,
}

/// Top-level description of one export run, written as `manifest.json`.
#[derive(Serialize)]
struct ExportManifest {
    generated_at: String,
    time_range: String,
    collections: Vec<ExportEntry>,
}

/// Fetches every collection and writes the full set of JSON table files.
///
/// All five workflows run against one library session, so the derived
/// collections reuse the memoized saved tracks and saved albums instead of
/// re-fetching them. Each collection lands in `<slug>.json` under the output
/// directory, pretty-printed with the full analytics schema, and a
/// `manifest.json` records the timestamp, the time range, and the row count
/// per table.
///
/// # Arguments
///
/// * `out` - Output directory, created if missing
/// * `time_range` - Optional ranking window override for the top collections
///
/// # Behavior
///
/// Any workflow or file-system failure terminates the command with a single
/// error message. Files already written for earlier collections stay on
/// disk, but no manifest is written, so an interrupted export is
/// recognizable.
pub async fn export(out: PathBuf, time_range: Option<TimeRange>) {
    if !config::api_url_configured() || !config::access_token_configured() {
        error!("Environment is not configured. Run spotitab info --config for details.");
    }

    let mut settings = FetchSettings::default();
    if let Some(time_range) = time_range {
        settings.time_range = time_range;
    }

    let pb = progress::fetch_spinner("Fetching library collections...");
    let session = LibrarySession::new(SpotifyClient::from_env(), settings)
        .with_observer(SpinnerObserver::new(pb.clone()));

    let result = write_tables(&session, &out).await;
    pb.finish_and_clear();

    match result {
        Ok(manifest) => {
            let tables = manifest.collections.len();
            let total_rows: usize = manifest.collections.iter().map(|e| e.rows).sum();
            println!("{}", Table::new(manifest.collections));
            success!(
                "Exported {} tables ({} rows) to {}.",
                tables,
                total_rows,
                out.display()
            );
        }
        Err(e) => error!("Export failed: {}", e),
    }
}

/// Runs the workflows in composition order and writes one file per
/// collection, then the manifest.
async fn write_tables(
    session: &LibrarySession<SpotifyClient>,
    out: &Path,
) -> Res<ExportManifest> {
    async_fs::create_dir_all(out).await?;

    let mut entries: Vec<ExportEntry> = Vec::new();
    for kind in CollectionKind::ALL {
        let (json, rows) = match kind {
            CollectionKind::TopArtists => {
                let rows = session.top_artists().await?;
                (serde_json::to_string_pretty(rows)?, rows.len())
            }
            CollectionKind::TopTracks => {
                let rows = session.top_tracks().await?;
                (serde_json::to_string_pretty(rows)?, rows.len())
            }
            CollectionKind::SavedTracks => {
                let rows = session.saved_tracks().await?;
                (serde_json::to_string_pretty(rows)?, rows.len())
            }
            CollectionKind::SavedAlbums => {
                let rows = session.saved_albums().await?;
                (serde_json::to_string_pretty(rows)?, rows.len())
            }
            CollectionKind::SavedArtists => {
                let rows = session.saved_artists().await?;
                (serde_json::to_string_pretty(rows)?, rows.len())
            }
        };

        let file = format!("{}.json", kind.slug());
        async_fs::write(out.join(&file), json).await?;
        entries.push(ExportEntry {
            collection: kind.label().to_string(),
            rows,
            file,
        });
    }

    let manifest = ExportManifest {
        generated_at: Utc::now().to_rfc3339(),
        time_range: session.settings().time_range.to_string(),
        collections: entries,
    };
    async_fs::write(
        out.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )
    .await?;

    Ok(manifest)
}
