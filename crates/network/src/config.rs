use std::env;

use url::Url;

use crate::error::ApiError;

/// Production endpoint of the quiz service.
pub const DEFAULT_BASE_URL: &str = "https://xm-assignment.web.app";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "QUIZ_API_BASE_URL";

/// Where the question API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL. A trailing slash is added so endpoint paths nest under it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `raw` is not an absolute http(s)-style URL.
    pub fn new(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        let mut base_url = Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                raw: raw.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read `QUIZ_API_BASE_URL`, falling back to the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the variable is set to an invalid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_env_value(env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self, ApiError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the joined URL cannot be built.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                raw: self.base_url.to_string(),
                source,
            })
    }
}

impl Default for ApiConfig {
    /// # Panics
    ///
    /// Panics if [`DEFAULT_BASE_URL`] stops being a valid URL.
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base url should be valid")
    }
}
