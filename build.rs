//! Build script for the Spotify library table exporter.
//!
//! Copies the configuration template into the user's local data directory
//! during compilation so that a freshly installed binary finds a ready-to-edit
//! example in the place the application looks for its configuration.

use std::{env, fs, path::PathBuf};

/// Build entry point that stages the configuration template.
///
/// Performs the following steps:
/// 1. **Dependency Tracking**: re-runs when the template file changes
/// 2. **Path Resolution**: resolves the template in the crate root
/// 3. **Directory Creation**: ensures the local data directory exists
/// 4. **File Copying**: copies the template next to where `.env` is expected
///
/// # Destination Location
///
/// The template lands in the platform-specific local data directory:
/// - Linux: `~/.local/share/spotitab/.env.example`
/// - macOS: `~/Library/Application Support/spotitab/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotitab/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template produces a cargo warning instead of a failed build;
/// directory creation and copy failures are treated as critical and abort
/// the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotitab");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
