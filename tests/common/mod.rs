#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use pmcli::{
    error::ServiceError,
    service::CatalogService,
    session::Session,
    types::{
        AlbumHit, ArtistHit, Credentials, Device, RawAlbum, RawArtist, RawTrack, SearchResponse,
        SongHit,
    },
};

pub const DEVICE_ID: &str = "device-1";

/// In-memory catalog; every call is recorded in `calls`.
#[derive(Default)]
pub struct MockCatalog {
    pub accept_login: bool,
    pub devices: Vec<Device>,
    pub searches: HashMap<String, SearchResponse>,
    pub albums: HashMap<String, RawAlbum>,
    pub artists: HashMap<String, RawArtist>,
    pub unresolvable: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            accept_login: true,
            devices: vec![Device {
                id: DEVICE_ID.to_string(),
                name: Some("phone".to_string()),
            }],
            ..Default::default()
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CatalogService for MockCatalog {
    async fn login(
        &mut self,
        email: &str,
        _password: &str,
        device_id: &str,
    ) -> Result<bool, ServiceError> {
        self.record(format!("login:{}:{}", email, device_id));
        Ok(self.accept_login)
    }

    async fn registered_devices(&self) -> Result<Vec<Device>, ServiceError> {
        Ok(self.devices.clone())
    }

    async fn search(
        &self,
        query: &str,
        max_per_category: u32,
    ) -> Result<SearchResponse, ServiceError> {
        self.record(format!("search:{}:{}", query, max_per_category));
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn artist_info(
        &self,
        artist_id: &str,
        include_albums: bool,
        top_track_limit: u32,
        album_limit: u32,
    ) -> Result<RawArtist, ServiceError> {
        self.record(format!(
            "artist:{}:{}:{}:{}",
            artist_id, include_albums, top_track_limit, album_limit
        ));
        let mut artist = self
            .artists
            .get(artist_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(artist_id.to_string()))?;
        artist.top_tracks.truncate(top_track_limit as usize);
        if include_albums {
            artist.albums.truncate(album_limit as usize);
        } else {
            artist.albums.clear();
        }
        Ok(artist)
    }

    async fn album_info(&self, album_id: &str) -> Result<RawAlbum, ServiceError> {
        self.record(format!("album:{}", album_id));
        self.albums
            .get(album_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(album_id.to_string()))
    }

    async fn stream_url(&self, track_id: &str, device_id: &str) -> Result<String, ServiceError> {
        self.record(format!("stream:{}", track_id));
        if self.unresolvable.contains(track_id) {
            return Err(ServiceError::NotFound(track_id.to_string()));
        }
        Ok(stream_for(track_id, device_id))
    }
}

pub fn stream_for(track_id: &str, device_id: &str) -> String {
    format!("https://stream.test/{}?device={}", track_id, device_id)
}

pub fn credentials() -> Credentials {
    Credentials {
        email: "listener@example.com".to_string(),
        password: "hunter2".to_string(),
        device_id: "0123456789abcdef".to_string(),
    }
}

pub async fn session(mock: MockCatalog) -> Session<MockCatalog> {
    Session::authenticate(mock, &credentials())
        .await
        .expect("mock login succeeds")
}

pub fn raw_track(id: &str, title: &str, album: &str) -> RawTrack {
    RawTrack {
        store_id: Some(id.to_string()),
        title: Some(title.to_string()),
        artist: Some("Daft Punk".to_string()),
        album: Some(album.to_string()),
    }
}

pub fn raw_album(id: &str, name: &str, tracks: Vec<RawTrack>) -> RawAlbum {
    RawAlbum {
        album_id: Some(id.to_string()),
        name: Some(name.to_string()),
        artist: Some("Daft Punk".to_string()),
        track_count: Some(tracks.len()),
        tracks,
    }
}

pub fn raw_artist(id: &str, name: &str) -> RawArtist {
    RawArtist {
        artist_id: Some(id.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn discovery_tracks() -> Vec<RawTrack> {
    vec![
        raw_track("t1", "One More Time", "Discovery"),
        raw_track("t4", "Aerodynamic", "Discovery"),
        raw_track("t2", "Digital Love", "Discovery"),
        raw_track("t5", "Harder, Better, Faster, Stronger", "Discovery"),
        raw_track("t6", "Voyager", "Discovery"),
    ]
}

/// 2 artists, 1 album of 5 tracks, 3 songs for the query "daft punk".
pub fn daft_punk_catalog() -> MockCatalog {
    let mut mock = MockCatalog::new();

    let response = SearchResponse {
        artist_hits: vec![
            ArtistHit {
                artist: raw_artist("ar1", "Daft Punk"),
            },
            ArtistHit {
                artist: raw_artist("ar2", "Thomas Bangalter"),
            },
        ],
        album_hits: vec![AlbumHit {
            album: raw_album("al1", "Discovery", Vec::new()),
        }],
        song_hits: vec![
            SongHit {
                track: raw_track("t1", "One More Time", "Discovery"),
            },
            SongHit {
                track: raw_track("t2", "Digital Love", "Discovery"),
            },
            SongHit {
                track: raw_track("t3", "Around the World", "Homework"),
            },
        ],
    };
    mock.searches.insert("daft punk".to_string(), response);
    mock.albums
        .insert("al1".to_string(), raw_album("al1", "Discovery", discovery_tracks()));

    let mut artist = raw_artist("ar1", "Daft Punk");
    artist.top_tracks = (1..=20)
        .map(|i| raw_track(&format!("top{}", i), &format!("Hit {}", i), "Alive"))
        .collect();
    artist.albums = (1..=12)
        .map(|i| raw_album(&format!("alb{}", i), &format!("Album {}", i), Vec::new()))
        .collect();
    mock.artists.insert("ar1".to_string(), artist);

    mock
}
