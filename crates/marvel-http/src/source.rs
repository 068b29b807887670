//! HTTP-backed character source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument, trace};

use marvel_core::signer::{Clock, SystemClock};
use marvel_core::{
    ApiError, CharacterSource, RequestSigner, Result, ResultEnvelope, SearchQuery, TransportError,
    decode,
};

/// Overall request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body the API sends with non-success statuses.
///
/// `code` is a number for some failures and a string for others, and some
/// failures put the text in `status` instead of `message`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<serde_json::Value>,
    message: Option<String>,
    status: Option<String>,
}

/// A character source that talks to the API over HTTP.
///
/// Every search signs a fresh URL, issues one GET and waits for the whole
/// body before decoding it.
#[derive(Debug)]
pub struct HttpCharacterSource<C = SystemClock> {
    client: reqwest::Client,
    signer: RequestSigner<C>,
}

impl<C: Clock> HttpCharacterSource<C> {
    /// Create a source with the given overall request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(signer: RequestSigner<C>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marvel-http/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, signer })
    }
}

#[async_trait]
impl<C: Clock> CharacterSource for HttpCharacterSource<C> {
    #[instrument(skip(self), fields(base = %self.signer.base()))]
    async fn search(&self, query: &SearchQuery) -> Result<ResultEnvelope> {
        query.validate()?;

        let url = self.signer.signed_url(query);
        debug!("characters query");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        trace!(status = %status, "characters response");

        let body = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(api_error(status, &body).into());
        }

        let envelope = decode(&body)?;
        debug!(
            count = envelope.data.count,
            total = envelope.data.total,
            "characters decoded"
        );
        Ok(envelope)
    }
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

/// Build an [`ApiError`] from a non-success response, reading the error
/// body when it has the expected shape.
fn api_error(status: StatusCode, body: &[u8]) -> ApiError {
    let status = status.as_u16();

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(error_body) => {
            let code = error_body.code.and_then(|code| match code {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
            ApiError::new(status, code, error_body.message.or(error_body.status))
        }
        Err(_) => ApiError::new(status, None, None),
    }
}
