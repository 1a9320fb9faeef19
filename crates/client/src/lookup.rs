//! HTTP client for the address lookup endpoint.

use std::future::Future;

use address_book_core::LookupResponse;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::ClientConfig;

/// Path of the lookup endpoint relative to the server URL.
const LOOKUP_PATH: &str = "api/getAddresses";

/// Transport-level failures talking to the lookup endpoint.
///
/// Error-status responses with a well-formed body are not errors: they come
/// back as [`LookupResponse::Error`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server URL cannot be extended with the lookup path.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A success body arrived with an error status.
    #[error("Unexpected HTTP status {0} for a success body")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Anything able to answer a lookup request.
pub trait LookupClient {
    /// Request candidates for a postcode and house number.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decoding failures.
    fn lookup(
        &self,
        postcode: &str,
        house_number: &str,
    ) -> impl Future<Output = Result<LookupResponse, ClientError>> + Send;
}

/// Lookup client talking to the server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpLookupClient {
    /// Create a client for the server in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the lookup path cannot be joined
    /// onto the server URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.server_url.join(LOOKUP_PATH)?,
        })
    }

    /// Full URL of the lookup endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl LookupClient for HttpLookupClient {
    #[instrument(skip(self))]
    async fn lookup(&self, postcode: &str, house_number: &str) -> Result<LookupResponse, ClientError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("postcode", postcode)
            .append_pair("streetnumber", house_number);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        let body: LookupResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse lookup response"
            );
            ClientError::Parse(e)
        })?;

        if !status.is_success() && matches!(body, LookupResponse::Ok { .. }) {
            return Err(ClientError::UnexpectedStatus(status));
        }

        tracing::debug!(status = %status, "Lookup response received");
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let config = ClientConfig::parse("http://localhost:3000").unwrap();
        let client = HttpLookupClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:3000/api/getAddresses"
        );
    }

    #[test]
    fn test_endpoint_keeps_directory_prefix() {
        let config = ClientConfig::parse("http://localhost:3000/lookup/").unwrap();
        let client = HttpLookupClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:3000/lookup/api/getAddresses"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Grab a free port, then close it again
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig::parse(&format!("http://{addr}")).unwrap();
        let client = HttpLookupClient::new(&config).unwrap();
        let err = client.lookup("1234", "5").await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
