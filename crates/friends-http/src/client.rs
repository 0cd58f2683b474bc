//! JSON-over-HTTP client.

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use friends_core::error::{Error, ProtocolError, TransportError};

/// Thin wrapper around `reqwest::Client` that maps failures into
/// [`friends_core::Error`].
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

/// Error body some services send alongside a failure status.
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpClient {
    pub(crate) fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("friends/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// GET a JSON document.
    #[instrument(skip(self))]
    pub(crate) async fn get_json<R>(&self, url: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!("GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Send a JSON body and decode a JSON response.
    #[instrument(skip(self, body))]
    pub(crate) async fn send_json<B, R>(&self, method: Method, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%method, "sending JSON body");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// DELETE a resource, ignoring any response body.
    #[instrument(skip(self))]
    pub(crate) async fn delete(&self, url: &str) -> Result<(), Error> {
        debug!("DELETE");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "response");
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Fetch `url` and return the response headers' content type on success.
    pub(crate) async fn content_type(&self, url: &str) -> Result<Option<String>, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Protocol(ProtocolError::new(status.as_u16(), None)));
        }

        Ok(response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string))
    }

    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(|e| {
                TransportError::Decode {
                    message: e.to_string(),
                }
                .into()
            })
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.message.or(body.error)),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
