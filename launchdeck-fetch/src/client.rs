//! The certificate-pinned HTTP transport.
//!
//! All connections run through the pinning verifier of [`crate::pin`]
//! before any data is read from the socket; a pin rejection fails the
//! handshake and surfaces as [`NetworkError::TransportFailure`] with no
//! retry.

use std::time::Duration;

use launchdeck_core::NetworkError;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config;
use crate::pin::{PinnedKeyFingerprint, pinned_tls_config};
use crate::request::{FetchRequest, Method};

/// Idle timeout for a single request (connect + time between reads).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Total timeout for the whole response.
const RESOURCE_TIMEOUT_SECS: u64 = 60;

/// User agent string for Launchdeck.
const USER_AGENT: &str = concat!("launchdeck/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Settings
// ============================================================================

/// Transport configuration.
///
/// Defaults match the production endpoint; tests substitute a local base
/// URL while keeping the same classification behavior.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL that request paths are joined onto.
    pub base_url: String,
    /// Per-request idle timeout.
    pub request_timeout: Duration,
    /// Total-resource timeout.
    pub resource_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            resource_timeout: Duration::from_secs(RESOURCE_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Transport client
// ============================================================================

/// HTTP client bound to one base URL, with the public-key pin mounted in
/// its TLS configuration.
#[derive(Debug, Clone)]
pub struct TransportClient {
    inner: Client,
    base_url: Url,
}

impl TransportClient {
    /// Creates a client with default settings and the configured pin.
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_settings(ClientSettings::default())
    }

    /// Creates a client with custom settings and the configured pin.
    pub fn with_settings(settings: ClientSettings) -> Result<Self, NetworkError> {
        let pin = PinnedKeyFingerprint::from_base64(config::PINNED_KEY_FINGERPRINT)
            .map_err(|e| NetworkError::TransportFailure(format!("pin configuration: {e}")))?;
        let tls = pinned_tls_config(config::PINNED_DOMAIN, pin)
            .map_err(|e| NetworkError::TransportFailure(format!("trust configuration: {e}")))?;

        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| NetworkError::InvalidRequest(format!("base URL: {e}")))?;

        let inner = Client::builder()
            .use_preconfigured_tls(tls)
            .connect_timeout(settings.request_timeout)
            .read_timeout(settings.request_timeout)
            .timeout(settings.resource_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NetworkError::TransportFailure(format!("client construction: {e}")))?;

        Ok(Self { inner, base_url })
    }

    /// Joins a request path onto the base URL.
    ///
    /// Rejects anything that is not a plain absolute path: the transport
    /// talks to exactly one host and a full URL would silently replace it.
    fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        if !path.starts_with('/') || path.contains("://") {
            return Err(NetworkError::InvalidRequest(format!(
                "not an API path: {path}"
            )));
        }
        self.base_url
            .join(path)
            .map_err(|e| NetworkError::InvalidRequest(format!("bad path {path}: {e}")))
    }

    /// Performs a request and returns the raw response body.
    #[instrument(skip(self, request), fields(path = %request.path()))]
    pub async fn request(&self, request: &FetchRequest) -> Result<Vec<u8>, NetworkError> {
        let url = self.endpoint(request.path())?;
        debug!(method = ?request.method(), "Sending request");

        let builder = match request.method() {
            Method::Get => self.inner.get(url),
            Method::Post => {
                let body = request.body().ok_or_else(|| {
                    NetworkError::InvalidRequest("POST request without a body".to_string())
                })?;
                self.inner
                    .post(url)
                    .header(header::CONTENT_TYPE, "application/json")
                    .json(body)
            }
        };

        let response = builder.send().await.map_err(classify_transport_error)?;
        let status = response.status();
        debug!(status = %status, "Response received");

        if !status.is_success() {
            return Err(NetworkError::BadResponse(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        debug!(len = bytes.len(), "Body received");
        Ok(bytes.to_vec())
    }

    /// Performs a request and decodes the JSON body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: &FetchRequest,
    ) -> Result<T, NetworkError> {
        let bytes = self.request(request).await?;
        decode_json(&bytes)
    }
}

/// Decodes a JSON payload, mapping shape mismatches to
/// [`NetworkError::DecodingError`].
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, NetworkError> {
    serde_json::from_slice(bytes).map_err(|e| NetworkError::DecodingError(e.to_string()))
}

/// Maps a transport-level reqwest failure onto the error taxonomy.
///
/// Everything that prevented a classified response from arriving - DNS,
/// a handshake rejected by the pin, timeouts - is a transport failure.
fn classify_transport_error(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::TransportFailure("request timed out".to_string())
    } else if err.is_connect() {
        NetworkError::TransportFailure(format!("connection failed: {err}"))
    } else if err.is_request() && err.url().is_none() {
        NetworkError::InvalidRequest(err.to_string())
    } else {
        NetworkError::TransportFailure(err.to_string())
    }
}
