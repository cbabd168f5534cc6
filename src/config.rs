use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use std::fmt;
use std::time::Duration;

use crate::{package::user_agent, runtime::Runtime};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "APIVERVE_API_KEY";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const DEFAULT_HOST: &str = "api.apiverve.com";
pub const DEFAULT_PATH: &str = "/v1/inflationrate";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key given and none found in the environment
    MissingApiKey,
    /// API key contains characters that cannot go in a header
    InvalidApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(
                f,
                "An API key is required. Pass --api-key or set the {} environment variable.",
                API_KEY_ENV
            ),
            ConfigError::InvalidApiKey => {
                write!(f, "The API key contains characters not allowed in an HTTP header")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Connection options for the Inflation Rate API.
#[derive(Clone)]
pub struct ClientOptions {
    api_key: String,
    /// Use https for the default endpoint
    pub secure: bool,
    /// Full endpoint URL, overriding host and scheme
    pub api_url: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &mask_key(&self.api_key))
            .field("secure", &self.secure)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientOptions {
    /// Creates options with the given key. The key must not be blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        Ok(Self {
            api_key,
            secure: true,
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Uses `api_key` when given, otherwise reads [`API_KEY_ENV`].
    pub fn resolve<R: Runtime>(runtime: &R, api_key: Option<String>) -> Result<Self> {
        match api_key {
            Some(key) => Self::new(key),
            None => Self::from_runtime(runtime),
        }
    }

    pub fn from_runtime<R: Runtime>(runtime: &R) -> Result<Self> {
        let key = runtime
            .env_var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(key)
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The URL requests are sent to.
    pub fn endpoint(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let scheme = if self.secure { "https" } else { "http" };
                format!("{}://{}{}", scheme, DEFAULT_HOST, DEFAULT_PATH)
            }
        }
    }

    /// Builds a reqwest client that sends the API key and user agent on every request.
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();

        let mut key_value =
            HeaderValue::from_str(&self.api_key).map_err(|_| ConfigError::InvalidApiKey)?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        debug!("Using API key for authentication: {}", mask_key(&self.api_key));

        Client::builder()
            .user_agent(user_agent())
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")
    }
}

/// Shows only the ends of a key, e.g. `abcd*********wxyz`.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
