use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// An album as described by its ID3 tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumID3 {
    /// The album ID
    pub id: String,
    /// The album name
    pub name: String,
    /// The album artist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// The album artist ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    /// The album cover art ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    /// The number of songs in the album
    #[serde(default)]
    pub song_count: u32,
    /// The total duration of the album in seconds
    #[serde(default)]
    pub duration: u32,
    /// The release year of the album
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The genre of the album
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Orderings supported by `getAlbumList2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumListType {
    /// Newest additions first.
    Newest,
    /// Most recently played first.
    Recent,
    /// Alphabetical by album name.
    AlphabeticalByName,
    /// Alphabetical by album artist.
    AlphabeticalByArtist,
}
impl AlbumListType {
    fn as_str(&self) -> &'static str {
        match self {
            AlbumListType::Newest => "newest",
            AlbumListType::Recent => "recent",
            AlbumListType::AlphabeticalByName => "alphabeticalByName",
            AlbumListType::AlphabeticalByArtist => "alphabeticalByArtist",
        }
    }
}

/// Album endpoints.
impl Client {
    /// The largest page `getAlbumList2` will return.
    pub const MAX_ALBUM_PAGE_SIZE: usize = 500;

    /// Fetch one page of albums, organised by ID3 tags.
    ///
    /// `size` is capped at [`Self::MAX_ALBUM_PAGE_SIZE`] by the server.
    pub async fn get_album_list_2(
        &self,
        ty: AlbumListType,
        size: Option<usize>,
        offset: Option<usize>,
    ) -> ClientResult<Vec<AlbumID3>> {
        let mut parameters = vec![("type", ty.as_str().to_string())];
        if let Some(size) = size {
            parameters.push(("size", size.to_string()));
        }
        if let Some(offset) = offset {
            parameters.push(("offset", offset.to_string()));
        }

        #[derive(Deserialize)]
        struct AlbumList2 {
            #[serde(default)]
            album: Vec<AlbumID3>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct AlbumList2Response {
            album_list_2: AlbumList2,
        }

        Ok(self
            .request::<AlbumList2Response>("getAlbumList2", &parameters)
            .await?
            .album_list_2
            .album)
    }
}
