//! # Catalog Module
//!
//! Tracks, albums and artists share one closed type, [`CatalogEntity`], so
//! listing, browsing and playback match exhaustively over the three kinds.
//! Entities are immutable values built from the service's raw payloads; hits
//! missing an identifier or a name are dropped while mapping.
//!
//! - [`CatalogEntity::expand`] lists an entity's sub-entities (used by `show`)
//! - [`CatalogEntity::resolve`] turns an entity into stream locators (used by
//!   the playback pipeline)
//! - [`search`] maps a query into a [`SearchResultSet`]

mod entity;
mod search;

pub use entity::{
    ARTIST_BROWSE_ALBUMS, ARTIST_BROWSE_TOP_TRACKS, ARTIST_PLAY_TOP_TRACKS, Album, Artist,
    CatalogEntity, ExpandMode, StreamLocator, Track,
};
pub use search::{SearchResultSet, search};
