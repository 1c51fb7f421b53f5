/// Everything that can go wrong while talking to the server.
#[derive(Debug)]
pub enum ClientError {
    /// The HTTP request itself failed.
    ReqwestError(reqwest::Error),
    /// The response body was not the JSON we expected.
    DeserializationError(serde_json::Error),
    /// The server answered with a `failed` status.
    SubsonicError {
        /// The Subsonic error code.
        code: i32,
        /// The human-readable message, if the server sent one.
        message: Option<String>,
    },
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "request failed: {e}"),
            ClientError::DeserializationError(e) => write!(f, "malformed response: {e}"),
            ClientError::SubsonicError { code, message } => match message {
                Some(message) => write!(f, "server error {code}: {message}"),
                None => write!(f, "server error {code}"),
            },
        }
    }
}
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::ReqwestError(e) => Some(e),
            ClientError::DeserializationError(e) => Some(e),
            ClientError::SubsonicError { .. } => None,
        }
    }
}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DeserializationError(e)
    }
}
/// Shorthand for results produced by [`Client`].
pub type ClientResult<T> = Result<T, ClientError>;

/// A connection to a single OpenSubsonic server.
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) client_id: String,
    pub(crate) http: reqwest::Client,
}
impl Client {
    /// The protocol version we advertise.
    pub const API_VERSION: &str = "1.16.1";

    /// Create a client. `client_id` identifies the application to the server.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            client_id: client_id.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The server this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = Client::new("http://localhost:4533/", "u", "p", "kestrel");
        assert_eq!(client.base_url(), "http://localhost:4533");
    }

    #[test]
    fn debug_output_omits_password() {
        let client = Client::new("http://localhost:4533", "u", "hunter2", "kestrel");
        assert!(!format!("{client:?}").contains("hunter2"));
    }

    #[test]
    fn subsonic_error_display() {
        let with_message = ClientError::SubsonicError {
            code: 40,
            message: Some("Wrong username or password".to_string()),
        };
        assert_eq!(
            with_message.to_string(),
            "server error 40: Wrong username or password"
        );

        let without_message = ClientError::SubsonicError {
            code: 0,
            message: None,
        };
        assert_eq!(without_message.to_string(), "server error 0");
    }
}
