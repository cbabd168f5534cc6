use serde::{Deserialize, Serialize};
use std::fmt;

/// Status value of a successful response.
pub const STATUS_OK: &str = "ok";

/// Envelope wrapping every API response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: String,
    pub error: Option<String>,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_OK)
    }

    /// Unwraps the payload, turning an error envelope into an [`ApiError`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.is_ok() {
            return Err(ApiError {
                message: self
                    .error
                    .unwrap_or_else(|| format!("API returned status '{}'", self.status)),
                code: self.code,
            });
        }

        self.data.ok_or_else(|| ApiError {
            message: "API response did not contain any data".to_string(),
            code: self.code,
        })
    }
}

/// Inflation figures for one country and year.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InflationRateData {
    /// ISO 2-letter country code
    pub country: String,
    pub country_name: String,
    pub year: i32,
    /// Annual inflation rate in percent
    pub inflation_rate: f64,
    pub cpi_index: f64,
    pub cpi_base_year: i32,
    pub last_updated: String,
}

/// Error reported by the API inside a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: Option<u16>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "API error ({}): {}", code, self.message),
            None => write!(f, "API error: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}
