use std::io::{self, Write};

use crate::{
    Error, Res,
    catalog::{Album, Artist, CatalogEntity, Track},
    service::CatalogService,
    session::Session,
    types::SearchResponse,
};

/// Grouped entities in relevance order.
///
/// Groups are always listed artists first, then albums, then songs, and the
/// display index runs across groups starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultSet {
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub songs: Vec<Track>,
}

impl SearchResultSet {
    /// Maps raw hits, skipping any that lack required fields.
    pub fn from_response(response: &SearchResponse) -> Self {
        Self {
            artists: response
                .artist_hits
                .iter()
                .filter_map(|hit| Artist::from_raw(&hit.artist))
                .collect(),
            albums: response
                .album_hits
                .iter()
                .filter_map(|hit| Album::from_raw(&hit.album))
                .collect(),
            songs: response
                .song_hits
                .iter()
                .filter_map(|hit| Track::from_raw(&hit.track))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.artists.len() + self.albums.len() + self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entities in display order; display index `i` is element `i - 1`.
    pub fn entities(&self) -> Vec<CatalogEntity> {
        let artists = self.artists.iter().cloned().map(CatalogEntity::from);
        let albums = self.albums.iter().cloned().map(CatalogEntity::from);
        let songs = self.songs.iter().cloned().map(CatalogEntity::from);
        artists.chain(albums).chain(songs).collect()
    }

    /// Writes `<index>: <label>` lines under a header per non-empty group.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let groups: [(&str, Vec<String>); 3] = [
            ("Artists", self.artists.iter().map(|a| a.to_string()).collect()),
            ("Albums", self.albums.iter().map(|a| a.to_string()).collect()),
            ("Songs", self.songs.iter().map(|s| s.to_string()).collect()),
        ];

        let mut index = 1;
        for (header, labels) in groups.iter() {
            if labels.is_empty() {
                continue;
            }
            writeln!(out, "{}:", header)?;
            for label in labels {
                writeln!(out, "{}: {}", index, label)?;
                index += 1;
            }
        }
        Ok(())
    }

    pub fn print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // a closed stdout leaves nothing to report to
        let _ = self.render(&mut handle);
    }
}

/// Queries the service for up to `max_per_category` hits per group.
///
/// An empty result is not an error.
pub async fn search<S: CatalogService>(
    query: &str,
    session: &Session<S>,
    max_per_category: u32,
) -> Res<SearchResultSet> {
    let response = session
        .service()
        .search(query, max_per_category)
        .await
        .map_err(|e| Error::resolution(query, e))?;

    Ok(SearchResultSet::from_response(&response))
}
