//! Immutable client configuration.

use url::Url;

use crate::error::{ApiError, Result};

/// Base endpoint and credentials shared by every request a client makes.
///
/// The base URL is parsed once here, so a malformed URL is reported at
/// construction and no request is ever attempted with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    token: String,
    api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, token: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Configuration(format!("{base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration(format!(
                "{base_url} cannot carry a resource path"
            )));
        }
        Ok(Self {
            base_url,
            token: token.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_url() {
        let config = ClientConfig::new("https://accounts.example.com/v2/", "tok", "key").unwrap();
        assert_eq!(config.base_url().path(), "/v2/");
        assert_eq!(config.token(), "tok");
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn rejects_relative_url() {
        let err = ClientConfig::new("accounts.example.com", "tok", "key").unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)), "got {err:?}");
    }

    #[test]
    fn rejects_url_without_path_base() {
        let err = ClientConfig::new("mailto:ops@example.com", "tok", "key").unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)), "got {err:?}");
    }
}
