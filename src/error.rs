use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures reported by the remote catalog service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("service rejected the request with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Auth(String),

    #[error("could not resolve '{identifier}': {source}")]
    CatalogResolution {
        identifier: String,
        #[source]
        source: ServiceError,
    },

    #[error("nothing to play for {0}")]
    NothingToPlay(String),

    #[error("could not write playlist to {}: {source}", path.display())]
    PlaylistWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    PlaybackLaunch(String),
}

impl Error {
    pub fn resolution(identifier: impl Into<String>, source: ServiceError) -> Self {
        Error::CatalogResolution {
            identifier: identifier.into(),
            source,
        }
    }

    /// Startup errors terminate the process; everything else only aborts the
    /// current command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Auth(_))
    }
}
