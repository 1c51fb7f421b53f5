use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::bs;

/// An album ID. Opaque; only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(pub String);
impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
impl From<&str> for AlbumId {
    fn from(id: &str) -> Self {
        AlbumId(id.to_string())
    }
}

/// A reference to an album's cover image on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverArtId(pub SmolStr);
impl std::fmt::Display for CoverArtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An album in the catalog. Never mutated once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// The album ID
    pub id: AlbumId,
    /// The album title
    pub title: String,
    /// The album artist
    pub artist: String,
    /// The album cover art ID, if the server has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_id: Option<CoverArtId>,
    /// The release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The number of tracks
    #[serde(default)]
    pub track_count: u32,
    /// The total duration in seconds
    #[serde(default)]
    pub duration: u32,
}
impl Album {
    /// The artist used when the server does not report one.
    pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

    /// Create an album with just the fields search and sort look at.
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Album {
            id: AlbumId(id.into()),
            title: title.into(),
            artist: artist.into(),
            cover_art_id: None,
            year: None,
            track_count: 0,
            duration: 0,
        }
    }

    /// Fetch every album on the server, a page at a time.
    pub async fn fetch_all(client: &bs::Client) -> bs::ClientResult<Vec<Album>> {
        let page_size = bs::Client::MAX_ALBUM_PAGE_SIZE;
        let mut albums: Vec<Album> = vec![];
        loop {
            let page = client
                .get_album_list_2(
                    bs::AlbumListType::AlphabeticalByName,
                    Some(page_size),
                    Some(albums.len()),
                )
                .await?;
            let page_len = page.len();
            albums.extend(page.into_iter().map(Album::from));
            if page_len < page_size {
                break;
            }
        }
        Ok(albums)
    }
}
impl From<bs::AlbumID3> for Album {
    fn from(album: bs::AlbumID3) -> Self {
        Album {
            id: AlbumId(album.id),
            title: album.name,
            artist: album
                .artist
                .unwrap_or_else(|| Self::UNKNOWN_ARTIST.to_string()),
            cover_art_id: album.cover_art.map(|id| CoverArtId(id.into())),
            year: album.year,
            track_count: album.song_count,
            duration: album.duration,
        }
    }
}
