//! Play Music CLI Library
//!
//! This library provides the building blocks of `pmcli`, a command-line client
//! that logs into a remote music catalog, searches it, and hands the results to
//! an external media player. It covers the catalog entity model, the
//! search → resolve → playback pipeline, and the interactive shell around it.
//!
//! # Modules
//!
//! - `catalog` - Tracks, albums and artists, and grouped search results
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration file loading and well-known paths
//! - `error` - Error kinds shared by every layer
//! - `playback` - Playlist artifact, player launcher and the playback pipeline
//! - `service` - Remote catalog service contract and its HTTP client
//! - `session` - Authenticated handle to the remote service
//! - `types` - Raw payloads exchanged with the remote service
//! - `utils` - Command parsing and other helpers
//!
//! # Example
//!
//! ```
//! use pmcli::{config, service::RemoteCatalog, session::Session};
//!
//! #[tokio::main]
//! async fn main() -> pmcli::Res<()> {
//!     let config = config::load(None)?;
//!     let service = RemoteCatalog::new(&config.settings)?;
//!     let session = Session::authenticate(service, &config.credentials).await?;
//!     // Use catalog and playback functions...
//!     session.close().await;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod playback;
pub mod service;
pub mod session;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation of the crate reports one of the [`Error`] kinds,
/// so callers can decide at the operation boundary whether the failure is
/// fatal (configuration, authentication) or only aborts the current command.
///
/// # Example
///
/// ```
/// use pmcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Getting stream URLs for {}", label);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in with device id {}", device_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only startup failures
/// (configuration, login) are reported this way; everything else goes
/// through [`warning!`] so the shell keeps running.
///
/// # Example
///
/// ```
/// error!("Config file not found at {}", path.display());
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: a failed search, a track the service could
/// not resolve, a player that did not start.
///
/// # Example
///
/// ```
/// warning!("No entry numbered {}", index);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
