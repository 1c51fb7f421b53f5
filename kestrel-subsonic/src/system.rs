use crate::{Client, ClientResult, request::Empty};

/// System endpoints.
impl Client {
    /// Check that the server is reachable and accepts our credentials.
    pub async fn ping(&self) -> ClientResult<()> {
        self.request::<Empty>("ping", &[]).await?;
        Ok(())
    }
}
