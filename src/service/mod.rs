//! # Remote Catalog Service
//!
//! This module describes the remote music catalog the CLI talks to and ships
//! the HTTP client used in production. Everything above this layer only sees
//! the [`CatalogService`] trait, so the session, the search engine and the
//! playback pipeline can be exercised against an in-memory catalog in tests.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Catalog, Playback)
//!          ↓
//! Session (authenticated handle + device id)
//!          ↓
//! CatalogService trait
//!     └── RemoteCatalog (reqwest, JSON)
//!          ↓
//! Remote catalog HTTP API
//! ```
//!
//! ## Operations
//!
//! - `login` - Exchanges credentials for a bearer token
//! - `registered_devices` - Lists the devices registered to the account
//! - `search` - Returns artist, album and song hits for a query
//! - `artist_info` - Artist details with top tracks and optionally albums
//! - `album_info` - Album details with its track listing
//! - `stream_url` - Resolves a track to a time-limited stream locator
//! - `logout` - Releases the server-side session
//!
//! ## Error Types
//!
//! All operations return [`ServiceError`]. The catalog layer attaches the
//! identifier that failed and surfaces it as a resolution error.
//!
//! ## Timeouts
//!
//! The HTTP client applies the configured timeout to every request. No retry
//! is attempted; a failed call aborts the current command.

mod remote;

pub use remote::RemoteCatalog;

use crate::{
    error::ServiceError,
    types::{Device, RawAlbum, RawArtist, SearchResponse},
};

/// Contract of the remote catalog service.
///
/// Only `login` and `logout` take `&mut self`: they run before the service is
/// handed to a [`crate::session::Session`] and after the session is closed.
/// Every other call is a read.
#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn login(
        &mut self,
        email: &str,
        password: &str,
        device_id: &str,
    ) -> Result<bool, ServiceError>;

    async fn registered_devices(&self) -> Result<Vec<Device>, ServiceError>;

    async fn search(&self, query: &str, max_per_category: u32)
    -> Result<SearchResponse, ServiceError>;

    async fn artist_info(
        &self,
        artist_id: &str,
        include_albums: bool,
        top_track_limit: u32,
        album_limit: u32,
    ) -> Result<RawArtist, ServiceError>;

    async fn album_info(&self, album_id: &str) -> Result<RawAlbum, ServiceError>;

    async fn stream_url(&self, track_id: &str, device_id: &str) -> Result<String, ServiceError>;

    async fn logout(&mut self) -> Result<(), ServiceError> {
        Ok(())
    }
}
