//! Retry policy and HTTP status classification.

use reqwest::StatusCode;

/// Maximum number of attempts for a request.
pub const MAX_RETRIES: usize = 3;

/// Delay between retry attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Errors that should not be retried.
#[derive(Debug, PartialEq, Eq)]
pub enum NonRetryableError {
    /// Rate limit or quota exceeded (HTTP 429)
    RateLimitExceeded(String),
    /// Missing or invalid API key (HTTP 401)
    AuthenticationFailed(String),
    /// Endpoint not found (HTTP 404)
    NotFound(String),
    /// Key lacks access to this API (HTTP 403)
    Forbidden(String),
    /// Other client errors that won't succeed on retry
    ClientError(String),
}

impl std::fmt::Display for NonRetryableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonRetryableError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or upgrade your APIVerve plan.",
                    msg
                )
            }
            NonRetryableError::AuthenticationFailed(msg) => {
                write!(
                    f,
                    "Authentication failed: {}. Check your APIVERVE_API_KEY.",
                    msg
                )
            }
            NonRetryableError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            NonRetryableError::Forbidden(msg) => {
                write!(
                    f,
                    "Access forbidden: {}. Your API key may not have access to this API.",
                    msg
                )
            }
            NonRetryableError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for NonRetryableError {}

/// A failed response that is worth another attempt (5xx and friends).
#[derive(Debug, PartialEq, Eq)]
pub struct RetryableStatus {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl std::fmt::Display for RetryableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "Server error (HTTP {}): {}", self.status.as_u16(), msg),
            None => write!(f, "Server error (HTTP {})", self.status.as_u16()),
        }
    }
}

impl std::error::Error for RetryableStatus {}

/// Classifies a failed HTTP status.
/// Returns Ok(()) if the request may be retried, Err with a user-friendly message if not.
/// `message` is the error text the API put in the response body, if any.
pub fn classify_status(
    status: StatusCode,
    message: Option<&str>,
) -> Result<(), NonRetryableError> {
    let describe = |fallback: &str| message.unwrap_or(fallback).to_string();

    match status {
        StatusCode::UNAUTHORIZED => Err(NonRetryableError::AuthenticationFailed(describe(
            "Invalid or missing API key",
        ))),
        StatusCode::FORBIDDEN => Err(NonRetryableError::Forbidden(describe(
            "Access to this resource is forbidden",
        ))),
        StatusCode::TOO_MANY_REQUESTS => {
            Err(NonRetryableError::RateLimitExceeded(describe("Too many requests")))
        }
        StatusCode::NOT_FOUND => Err(NonRetryableError::NotFound(describe(
            "The requested resource was not found",
        ))),
        // Other 4xx client errors are generally not retryable
        s if s.is_client_error() => Err(NonRetryableError::ClientError(match message {
            Some(msg) => format!("HTTP {} error: {}", s.as_u16(), msg),
            None => format!("HTTP {} error", s.as_u16()),
        })),
        // 5xx server errors are retryable
        _ => Ok(()),
    }
}

/// Builds the error for a failed response.
/// Non-retryable statuses become a [`NonRetryableError`], everything else a [`RetryableStatus`].
pub fn check_retryable(status: StatusCode, message: Option<String>) -> anyhow::Error {
    match classify_status(status, message.as_deref()) {
        Ok(()) => anyhow::Error::from(RetryableStatus { status, message }),
        Err(non_retryable) => anyhow::Error::from(non_retryable),
    }
}

/// Pulls the `error` field out of an API error body.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
}
