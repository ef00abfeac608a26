use std::fmt;

use crate::{
    Error, Res,
    catalog::SearchResultSet,
    service::CatalogService,
    session::Session,
    types::{RawAlbum, RawArtist, RawTrack},
};

/// Number of top tracks fetched when an artist is played.
pub const ARTIST_PLAY_TOP_TRACKS: u32 = 5;
/// Number of top tracks listed when an artist is browsed.
pub const ARTIST_BROWSE_TOP_TRACKS: u32 = 15;
/// Number of albums listed when an artist is browsed.
pub const ARTIST_BROWSE_ALBUMS: u32 = 10;

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Opaque, usually time-limited URL pointing at a track's audio.
pub type StreamLocator = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandMode {
    /// Only the tracks that will be handed to the player.
    Play,
    /// A longer listing, including an artist's albums.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: String,
    artist: String,
    album: String,
    title: String,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            album: album.into(),
            title: title.into(),
        }
    }

    /// Returns `None` when the payload lacks an id or a title.
    pub fn from_raw(raw: &RawTrack) -> Option<Self> {
        Some(Self::new(
            raw.store_id.clone()?,
            raw.artist.clone().unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            raw.album.clone().unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            raw.title.clone()?,
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub async fn stream_url<S: CatalogService>(&self, session: &Session<S>) -> Res<StreamLocator> {
        session
            .service()
            .stream_url(&self.id, session.device_id())
            .await
            .map_err(|e| Error::resolution(&self.id, e))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.artist, self.title, self.album)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    id: String,
    artist: String,
    name: String,
    track_count: usize,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        artist: impl Into<String>,
        name: impl Into<String>,
        track_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            name: name.into(),
            track_count,
        }
    }

    /// Returns `None` when the payload lacks an id or a name.
    pub fn from_raw(raw: &RawAlbum) -> Option<Self> {
        Some(Self::new(
            raw.album_id.clone()?,
            raw.artist.clone().unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            raw.name.clone()?,
            raw.track_count.unwrap_or(raw.tracks.len()),
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Songs of the album in the service's track order.
    pub async fn tracks<S: CatalogService>(&self, session: &Session<S>) -> Res<Vec<Track>> {
        let raw = session
            .service()
            .album_info(&self.id)
            .await
            .map_err(|e| Error::resolution(&self.id, e))?;

        Ok(raw.tracks.iter().filter_map(Track::from_raw).collect())
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    id: String,
    name: String,
    track_count: usize,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            track_count: ARTIST_PLAY_TOP_TRACKS as usize,
        }
    }

    /// Returns `None` when the payload lacks an id or a name.
    pub fn from_raw(raw: &RawArtist) -> Option<Self> {
        let mut artist = Self::new(raw.artist_id.clone()?, raw.name.clone()?);
        if !raw.top_tracks.is_empty() {
            artist.track_count = raw.top_tracks.len();
        }
        Some(artist)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn expand<S: CatalogService>(
        &self,
        session: &Session<S>,
        mode: ExpandMode,
    ) -> Res<SearchResultSet> {
        let (include_albums, top_tracks, albums) = match mode {
            ExpandMode::Play => (false, ARTIST_PLAY_TOP_TRACKS, 0),
            ExpandMode::Browse => (true, ARTIST_BROWSE_TOP_TRACKS, ARTIST_BROWSE_ALBUMS),
        };

        let raw = session
            .service()
            .artist_info(&self.id, include_albums, top_tracks, albums)
            .await
            .map_err(|e| Error::resolution(&self.id, e))?;

        let songs = raw.top_tracks.iter().filter_map(Track::from_raw).collect();
        let albums = match mode {
            ExpandMode::Play => Vec::new(),
            ExpandMode::Browse => raw.albums.iter().filter_map(Album::from_raw).collect(),
        };

        Ok(SearchResultSet {
            artists: Vec::new(),
            albums,
            songs,
        })
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A searchable, playable object of the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntity {
    Track(Track),
    Album(Album),
    Artist(Artist),
}

impl CatalogEntity {
    pub fn id(&self) -> &str {
        match self {
            CatalogEntity::Track(track) => track.id(),
            CatalogEntity::Album(album) => album.id(),
            CatalogEntity::Artist(artist) => artist.id(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogEntity::Track(_) => "track",
            CatalogEntity::Album(_) => "album",
            CatalogEntity::Artist(_) => "artist",
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Number of sub-items the entity stands for: 1 for a track, the track
    /// count for albums and artists.
    pub fn display_count(&self) -> usize {
        match self {
            CatalogEntity::Track(_) => 1,
            CatalogEntity::Album(album) => album.track_count,
            CatalogEntity::Artist(artist) => artist.track_count,
        }
    }

    /// Sub-entities of this entity, in service order.
    ///
    /// A track expands to itself, an album to its songs, an artist to its top
    /// songs and, when browsing, its albums.
    pub async fn expand<S: CatalogService>(
        &self,
        session: &Session<S>,
        mode: ExpandMode,
    ) -> Res<SearchResultSet> {
        match self {
            CatalogEntity::Track(track) => Ok(SearchResultSet {
                songs: vec![track.clone()],
                ..Default::default()
            }),
            CatalogEntity::Album(album) => Ok(SearchResultSet {
                songs: album.tracks(session).await?,
                ..Default::default()
            }),
            CatalogEntity::Artist(artist) => artist.expand(session, mode).await,
        }
    }

    /// Stream locators to play, in service order.
    ///
    /// The first track that cannot be resolved aborts the whole call.
    pub async fn resolve<S: CatalogService>(
        &self,
        session: &Session<S>,
    ) -> Res<Vec<StreamLocator>> {
        let tracks = match self {
            CatalogEntity::Track(track) => return Ok(vec![track.stream_url(session).await?]),
            _ => self.expand(session, ExpandMode::Play).await?.songs,
        };

        let mut locators = Vec::with_capacity(tracks.len());
        for track in &tracks {
            locators.push(track.stream_url(session).await?);
        }
        Ok(locators)
    }
}

impl fmt::Display for CatalogEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEntity::Track(track) => fmt::Display::fmt(track, f),
            CatalogEntity::Album(album) => fmt::Display::fmt(album, f),
            CatalogEntity::Artist(artist) => fmt::Display::fmt(artist, f),
        }
    }
}

impl From<Track> for CatalogEntity {
    fn from(track: Track) -> Self {
        CatalogEntity::Track(track)
    }
}

impl From<Album> for CatalogEntity {
    fn from(album: Album) -> Self {
        CatalogEntity::Album(album)
    }
}

impl From<Artist> for CatalogEntity {
    fn from(artist: Artist) -> Self {
        CatalogEntity::Artist(artist)
    }
}
