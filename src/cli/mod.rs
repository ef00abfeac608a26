//! # CLI Module
//!
//! This module provides the command-line interface layer for pmcli. It
//! implements the user-facing commands and coordinates the session, the
//! catalog and the playback pipeline.
//!
//! ## Overview
//!
//! - [`search`] - Runs a query and prints the numbered listing
//! - [`play`] - Plays one entity through the playback pipeline
//! - [`play_query`] - Searches, then plays the entry picked by number
//! - [`show`] - Lists the songs (and albums) an album or artist contains
//! - [`shell`] - Interactive loop combining the commands above
//!
//! ## Listings and Selection
//!
//! Every listing numbers its entries from 1 across all groups:
//!
//! ```text
//! Artists:
//! 1: Daft Punk
//! 2: Daft Punk Tribute
//! Albums:
//! 3: Daft Punk - Discovery
//! Songs:
//! 4: Daft Punk - One More Time - Discovery
//! ```
//!
//! The shell remembers the last listing, so `play 3` plays the album above and
//! `show 3` replaces the listing with the album's songs.
//!
//! ## Error Handling
//!
//! Configuration and login failures end the process before the shell starts.
//! Inside the shell a failed search, resolution, playlist write or player
//! launch is reported as a warning and the next command is accepted.
//!
//! ## Usage Patterns
//!
//! ```bash
//! pmcli                                   # interactive shell
//! pmcli search daft punk                  # one-shot listing
//! pmcli play discovery --pick 3 --shuffle # search and play entry 3
//! pmcli completions zsh                   # shell completions
//! ```

mod play;
mod search;
mod shell;
mod show;

pub use play::play;
pub use play::play_query;
pub use search::search;
pub use shell::shell;
pub use show::show;
