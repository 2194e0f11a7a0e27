//! Per-endpoint request assembly.
//!
//! # Design
//! Endpoints of the service do not share a routing convention: prefixes,
//! header sets and even the casing of the API-key header differ from one
//! operation to the next. Each operation therefore states its own path
//! segments and headers through this builder instead of inheriting them.

use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest};

/// Spelling of the API-key header expected by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiKeyHeader {
    /// `X-Api-Key`
    Title,
    /// `X-API-Key`
    Upper,
    /// `x-api-key`
    Lower,
}

impl ApiKeyHeader {
    fn name(self) -> &'static str {
        match self {
            ApiKeyHeader::Title => "X-Api-Key",
            ApiKeyHeader::Upper => "X-API-Key",
            ApiKeyHeader::Lower => "x-api-key",
        }
    }
}

pub(crate) struct RequestBuilder<'a> {
    config: &'a ClientConfig,
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl<'a> RequestBuilder<'a> {
    /// Appends `segments` to the base path. Each segment is percent-escaped,
    /// so identifiers can never introduce extra path components.
    pub(crate) fn new(config: &'a ClientConfig, method: HttpMethod, segments: &[&str]) -> Result<Self> {
        let mut url = config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Configuration(format!("{} cannot carry a resource path", config.base_url())))?
            .pop_if_empty()
            .extend(segments);
        Ok(Self {
            config,
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub(crate) fn json_content_type(self) -> Self {
        self.header("Content-Type", "application/json")
    }

    pub(crate) fn bearer(self) -> Self {
        let value = format!("Bearer {}", self.config.token());
        self.header("Authorization", value)
    }

    /// Bearer header, omitted when the client has no token.
    pub(crate) fn bearer_if_present(self) -> Self {
        if self.config.token().is_empty() {
            return self;
        }
        self.bearer()
    }

    pub(crate) fn api_key(self, spelling: ApiKeyHeader) -> Self {
        let key = self.config.api_key().to_string();
        self.header(spelling.name(), key)
    }

    /// API-key header, omitted when the client has no key.
    pub(crate) fn api_key_if_present(self, spelling: ApiKeyHeader) -> Self {
        if self.config.api_key().is_empty() {
            return self;
        }
        self.api_key(spelling)
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    pub(crate) fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url.into(),
            headers: self.headers,
            body: self.body,
        }
    }
}
