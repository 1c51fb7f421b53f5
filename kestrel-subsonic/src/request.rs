use rand::seq::IndexedRandom as _;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

const SALT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SALT_LENGTH: usize = 16;

/// Low-level request plumbing.
impl Client {
    /// Call `endpoint` and deserialize the body of the `subsonic-response`
    /// envelope into `T`. `T` names the endpoint's payload field, e.g. for
    /// `getAlbumList2` it is `{ albumList2: ... }`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent, the body is not valid JSON, or the
    /// server reports a failure.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<T> {
        let (salt, token) = self.salt_and_token();
        tracing::debug!(endpoint, "subsonic request");
        let bytes = self
            .http
            .get(format!("{}/rest/{endpoint}", self.base_url))
            .query(&[
                ("u", self.username.clone()),
                ("v", Self::API_VERSION.to_string()),
                ("c", self.client_id.clone()),
                ("f", "json".to_string()),
                ("t", token),
                ("s", salt),
            ])
            .query(parameters)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_envelope(&bytes)
    }

    fn salt_and_token(&self) -> (String, String) {
        let mut rng = rand::rng();
        let salt: String = SALT_CHARSET
            .choose_multiple(&mut rng, SALT_LENGTH)
            .map(|c| *c as char)
            .collect();
        let token = salted_token(&self.password, &salt);
        (salt, token)
    }
}

/// `hex(md5(password ++ salt))`, as required by token authentication.
pub(crate) fn salted_token(password: &str, salt: &str) -> String {
    let digest = md5::compute(format!("{password}{salt}"));
    data_encoding::HEXLOWER.encode(&digest.0)
}

/// Check the envelope's status first, then read the payload from the same
/// object, so a malformed payload surfaces as a deserialization error.
pub(crate) fn parse_envelope<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    let response = envelope.subsonic_response;
    let header = Header::deserialize(&response)?;
    match header.status {
        Status::Ok => Ok(T::deserialize(&response)?),
        Status::Failed => {
            let (code, message) = header
                .error
                .map(|e| (e.code, e.message))
                .unwrap_or((0, None));
            Err(ClientError::SubsonicError { code, message })
        }
    }
}

/// A payload for endpoints that return nothing beyond the status.
#[derive(Debug, Deserialize)]
pub(crate) struct Empty {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Envelope {
    subsonic_response: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Header {
    status: Status,
    error: Option<ResponseError>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum Status {
    Ok,
    Failed,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    code: i32,
    message: Option<String>,
}
