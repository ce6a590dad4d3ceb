//! REST HTTP client implementation.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use mahasiswa_core::error::{Error, NetworkError, ProtocolError, ValidationError};
use mahasiswa_core::{BaseUrl, Nim, Result};

use crate::config::ClientConfig;

/// Longest plain-text error body kept as a message.
const MAX_TEXT_MESSAGE: usize = 200;

/// Error body shape used by common REST backends.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the records backend.
///
/// Wraps a single `reqwest::Client`; clones share its connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl RestClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(map_reqwest)?;

        Ok(Self {
            client,
            base: config.base_url,
        })
    }

    /// Returns the base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// GET a URL and decode its JSON body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get<R>(&self, url: Url, nim: Option<&Nim>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest)?;

        let response = self.check_status(response, nim).await?;
        let body = response.bytes().await.map_err(map_reqwest)?;

        serde_json::from_slice(&body).map_err(|e| Error::Protocol(ProtocolError::from(e)))
    }

    /// Send a JSON body and ignore whatever the backend acknowledges with.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn send_json<B>(
        &self,
        method: Method,
        url: Url,
        body: &B,
        nim: Option<&Nim>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, %url, "request with JSON body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.check_status(response, nim).await?;
        Ok(())
    }

    /// DELETE a URL.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, url: Url, nim: Option<&Nim>) -> Result<()> {
        debug!(%url, "DELETE");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.check_status(response, nim).await?;
        Ok(())
    }

    /// Pass successful responses through; map everything else to an error.
    ///
    /// Statuses outside the 404 and 400/409/422 families (5xx included)
    /// become `Protocol` on every route, writes as well as reads.
    async fn check_status(
        &self,
        response: reqwest::Response,
        nim: Option<&Nim>,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            return Ok(response);
        }

        let message = read_error_message(response).await;

        Err(match status {
            StatusCode::NOT_FOUND => match nim {
                Some(nim) => Error::not_found(nim),
                None => Error::Protocol(ProtocolError::status(status.as_u16(), message)),
            },
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Error::Validation(ValidationError::new(Some(status.as_u16()), message))
            }
            _ => Error::Protocol(ProtocolError::status(status.as_u16(), message)),
        })
    }
}

/// Pull a human-readable message out of an error response, if there is one.
async fn read_error_message(response: reqwest::Response) -> Option<String> {
    let text = response.text().await.ok()?;

    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        if let Some(message) = body.message.or(body.error) {
            return Some(message);
        }
    }

    let text = text.trim();
    if text.is_empty() || text.len() > MAX_TEXT_MESSAGE {
        None
    } else {
        Some(text.to_string())
    }
}

/// Map a reqwest failure onto the error taxonomy.
fn map_reqwest(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Protocol(ProtocolError::malformed(err.to_string()))
    } else if err.is_timeout() {
        Error::Network(NetworkError::Timeout)
    } else if err.is_connect() {
        Error::Network(NetworkError::Connection {
            message: err.to_string(),
        })
    } else {
        Error::Network(NetworkError::Http {
            message: err.to_string(),
        })
    }
}
