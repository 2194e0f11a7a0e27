//! The accounts client and its response classification.
//!
//! # Design
//! `AccountsClient` holds an immutable `ClientConfig` and a `Transport`, and
//! nothing else. Every operation is split three ways: `build_*` validates the
//! input and produces an `HttpRequest`, `parse_*` classifies and decodes an
//! `HttpResponse`, and the plain method runs one through the transport and
//! hands the result to the other. Callers that do their own I/O can use the
//! first two directly on a client built with any transport value, `()`
//! included.
//!
//! The operations themselves live in `business`, `members` and `sanctions`.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::RequestBuilder;
use crate::transport::{Transport, UreqTransport};

/// Synchronous client for the accounts service.
///
/// Cheap to share: wrap it in an `Arc` or borrow it from many threads at
/// once. A failed call leaves the client untouched.
#[derive(Debug, Clone)]
pub struct AccountsClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl AccountsClient<UreqTransport> {
    /// Client over the default ureq transport with a 10 second timeout.
    pub fn new(base_url: &str, token: &str, api_key: &str) -> Result<Self> {
        let config = ClientConfig::new(base_url, token, api_key)?;
        Ok(Self::with_transport(config, UreqTransport::default()))
    }
}

impl<T> AccountsClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn request(&self, method: HttpMethod, segments: &[&str]) -> Result<RequestBuilder<'_>> {
        RequestBuilder::new(&self.config, method, segments)
    }
}

impl<T: Transport> AccountsClient<T> {
    pub(crate) fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.execute(request)
    }
}

/// Accept exactly `expected`; anything else becomes `ApiError::Server`.
pub(crate) fn expect_status(response: &HttpResponse, expected: u16) -> Result<()> {
    if response.status == expected {
        return Ok(());
    }
    debug!(status = response.status, expected, "unexpected status");
    Err(server_error(response))
}

/// Accept any status below 400.
pub(crate) fn expect_success(response: &HttpResponse) -> Result<()> {
    if response.status < 400 {
        return Ok(());
    }
    debug!(status = response.status, "error status");
    Err(server_error(response))
}

fn server_error(response: &HttpResponse) -> ApiError {
    ApiError::Server {
        status: response.status,
        body: response.body.clone(),
    }
}

pub(crate) fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The service encodes an empty list as `null`.
pub(crate) fn decode_list<D: DeserializeOwned>(response: &HttpResponse) -> Result<Vec<D>> {
    decode::<Option<Vec<D>>>(response).map(Option::unwrap_or_default)
}
