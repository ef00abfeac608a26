use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub items: Vec<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    pub store_id: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlbum {
    pub album_id: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub track_count: Option<usize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtist {
    pub artist_id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_tracks: Vec<RawTrack>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub albums: Vec<RawAlbum>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: RawArtist,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: RawAlbum,
}

/// A hit without its inner object maps to an empty payload and is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub track: RawTrack,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_hits: Vec<ArtistHit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album_hits: Vec<AlbumHit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub song_hits: Vec<SongHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamUrlResponse {
    pub url: String,
}
