//! Configuration management for the Play Music CLI.
//!
//! This module loads the user's credentials and runtime settings from a
//! key-value file and exposes the well-known paths the application shares
//! with the external player. The file uses the `.env` syntax understood by
//! `dotenv`, but its entries are read into a map instead of being exported
//! into the process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (`--player`, `--max-results`)
//! 2. The config file (`<config-dir>/pmcli/config` or `--config <path>`)
//! 3. Application defaults (where applicable)
//!
//! # Keys
//!
//! | Key            | Required | Meaning                                   |
//! |----------------|----------|-------------------------------------------|
//! | `EMAIL`        | yes      | Account email used to log in              |
//! | `PASSWORD`     | yes      | Account password                          |
//! | `DEVICE_ID`    | yes      | Device identity presented at login        |
//! | `API_URL`      | yes      | Base URL of the remote catalog service    |
//! | `PLAYER`       | no       | Player executable, defaults to `mpv`      |
//! | `MAX_RESULTS`  | no       | Search hits per category, defaults to 3   |
//! | `TIMEOUT_SECS` | no       | Network timeout in seconds, defaults to 15|

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{Error, Res, types::Credentials};

pub const APP_DIR: &str = "pmcli";
pub const DEFAULT_PLAYER: &str = "mpv";
pub const DEFAULT_MAX_RESULTS: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Runtime settings that are not part of the login handshake.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub player: String,
    pub max_results: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

/// Returns the application's configuration directory.
///
/// Resolves to the platform-specific configuration directory joined with
/// `pmcli`:
/// - Linux: `~/.config/pmcli`
/// - macOS: `~/Library/Application Support/pmcli`
/// - Windows: `%APPDATA%/pmcli`
///
/// Falls back to `./pmcli` when the platform directory cannot be determined.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Default location of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config")
}

/// Fixed location of the playlist artifact handed to the player.
pub fn playlist_path() -> PathBuf {
    config_dir().join("playlist")
}

/// Loads the configuration from `path`, or from [`config_path`] when `None`.
///
/// # Errors
///
/// Returns [`Error::Config`] if:
/// - The file does not exist
/// - A line cannot be parsed
/// - One of `EMAIL`, `PASSWORD`, `DEVICE_ID` or `API_URL` is missing or empty
/// - `MAX_RESULTS` or `TIMEOUT_SECS` is not a positive number
///
/// No network access happens here, so a broken config always fails before
/// the login handshake is attempted.
///
/// # Example
///
/// ```
/// use pmcli::config;
///
/// let config = config::load(None)?;
/// println!("Logging in as {}", config.credentials.email);
/// ```
pub fn load(path: Option<&Path>) -> Res<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if !path.is_file() {
        return Err(Error::Config(format!(
            "Config file not found at {}. See config.example",
            path.display()
        )));
    }

    let entries = read_entries(&path)?;
    let required = |key: &str| -> Res<String> {
        match entries.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(Error::Config(format!(
                "Key '{}' not found in {}. See config.example",
                key,
                path.display()
            ))),
        }
    };

    let credentials = Credentials {
        email: required("EMAIL")?,
        password: required("PASSWORD")?,
        device_id: required("DEVICE_ID")?,
    };

    let settings = Settings {
        api_url: required("API_URL")?.trim_end_matches('/').to_string(),
        player: entries
            .get("PLAYER")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
        max_results: parse_number(&entries, "MAX_RESULTS", DEFAULT_MAX_RESULTS)?,
        timeout: Duration::from_secs(parse_number(
            &entries,
            "TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?),
    };

    Ok(Config {
        credentials,
        settings,
    })
}

fn read_entries(path: &Path) -> Res<HashMap<String, String>> {
    let iter = dotenv::from_path_iter(path)
        .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;

    let mut entries = HashMap::new();
    for item in iter {
        let (key, value) = item
            .map_err(|e| Error::Config(format!("Cannot parse {}: {}", path.display(), e)))?;
        entries.insert(key, value);
    }
    Ok(entries)
}

fn parse_number<T>(entries: &HashMap<String, String>, key: &str, default: T) -> Res<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = entries.get(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(Error::Config(format!(
            "Key '{}' must be a positive number, got '{}'",
            key, raw
        ))),
    }
}
