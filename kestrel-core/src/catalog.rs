use std::{future::Future, sync::Arc};

use kestrel_state::Album;

use crate::bs;

/// A fetch of the album list failed. Carries the message to show the user,
/// unchanged from where it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailed(pub String);
impl FetchFailed {
    pub fn message(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
impl std::error::Error for FetchFailed {}
impl From<bs::ClientError> for FetchFailed {
    fn from(e: bs::ClientError) -> Self {
        FetchFailed(e.to_string())
    }
}

/// Somewhere the full album list can be fetched from.
pub trait AlbumCatalog: Send + Sync + 'static {
    /// Fetch every album, in the catalog's own order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Album>, FetchFailed>> + Send;
}

/// An [`AlbumCatalog`] backed by an OpenSubsonic server.
pub struct SubsonicCatalog {
    client: Arc<bs::Client>,
}
impl SubsonicCatalog {
    pub const CLIENT_ID: &str = "kestrel";

    pub fn new(client: Arc<bs::Client>) -> Self {
        Self { client }
    }

    pub fn connect(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(Arc::new(bs::Client::new(
            base_url,
            username,
            password,
            Self::CLIENT_ID,
        )))
    }
}
impl AlbumCatalog for SubsonicCatalog {
    async fn fetch_all(&self) -> Result<Vec<Album>, FetchFailed> {
        self.client.ping().await?;
        let albums = Album::fetch_all(&self.client).await?;
        tracing::debug!(
            "fetched {} albums from {}",
            albums.len(),
            self.client.base_url()
        );
        Ok(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let error = bs::ClientError::SubsonicError {
            code: 70,
            message: Some("not found".to_string()),
        };
        let expected = error.to_string();
        assert_eq!(FetchFailed::from(error).message(), expected);
    }

    #[test]
    fn display_is_verbatim() {
        assert_eq!(
            FetchFailed("network error".to_string()).to_string(),
            "network error"
        );
    }

    #[tokio::test]
    async fn unreachable_server_fails_without_panicking() {
        // Port 9 (discard) on loopback is reliably closed in test environments.
        let catalog = SubsonicCatalog::connect("http://127.0.0.1:9", "u", "p");
        let error = catalog.fetch_all().await.unwrap_err();
        assert!(error.message().starts_with("request failed"), "{error}");
    }
}
