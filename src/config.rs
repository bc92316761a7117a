//! Configuration management for the Spotify library table exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage the two pieces of runtime configuration the connector needs: the
//! Web API base URL and the access credential issued by external OAuth
//! tooling.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotitab/.env`. This allows users to store
/// the access token securely without exporting it in every shell.
///
/// A missing `.env` file is not an error: all variables may equally well come
/// from the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotitab/.env`
/// - macOS: `~/Library/Application Support/spotitab/.env`
/// - Windows: `%LOCALAPPDATA%/spotitab/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if
/// directory creation or file parsing fails.
///
/// # Example
///
/// ```
/// use spotitab::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotitab/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. Every catalog request is made
/// relative to this URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the access token presented to the Web API.
///
/// Retrieves the `SPOTIFY_ACCESS_TOKEN` environment variable which contains
/// the opaque OAuth credential. Obtaining and refreshing the token is the job
/// of external tooling; this application only consumes the string and sends
/// it as a bearer credential.
///
/// The token must carry the `user-top-read` and `user-library-read` scopes
/// for the library endpoints to answer.
///
/// # Panics
///
/// Panics if the `SPOTIFY_ACCESS_TOKEN` environment variable is not set.
///
/// # Example
///
/// ```
/// let token = spotify_access_token(); // e.g., "BQCf3..."
/// ```
pub fn spotify_access_token() -> String {
    env::var("SPOTIFY_ACCESS_TOKEN").expect("SPOTIFY_ACCESS_TOKEN must be set")
}

/// Reports whether the Web API base URL is configured.
///
/// Non-panicking probe used by the `info` command to display configuration
/// status without aborting on a fresh installation.
pub fn api_url_configured() -> bool {
    env::var("SPOTIFY_API_URL").map(|v| !v.is_empty()).unwrap_or(false)
}

/// Reports whether an access token is configured.
///
/// Non-panicking probe used by the `info` command to display configuration
/// status without aborting on a fresh installation.
pub fn access_token_configured() -> bool {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}
