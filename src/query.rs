//! Query options for the Inflation Rate API.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// First year the inflation dataset covers.
pub const EARLIEST_YEAR: u32 = 1960;

const COUNTRY_PARAM: &str = "country";
const YEAR_PARAM: &str = "year";

/// Errors raised while building or validating a query.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Country is not a two-letter ISO code
    InvalidCountry(String),
    /// Year is not a number or predates the dataset
    InvalidYear(String),
    /// Extra parameter collides with a named option
    DuplicateParam(String),
    /// Extra parameter is not in `key=value` form
    MalformedParam(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidCountry(value) => write!(
                f,
                "Invalid country '{}'. Expected an ISO 2-letter country code (e.g. US, GB, JP).",
                value
            ),
            QueryError::InvalidYear(value) => write!(
                f,
                "Invalid year '{}'. Expected a year no earlier than {}.",
                value, EARLIEST_YEAR
            ),
            QueryError::DuplicateParam(key) => {
                write!(f, "Parameter '{}' is already set by a named option", key)
            }
            QueryError::MalformedParam(value) => {
                write!(f, "Invalid parameter '{}'. Expected 'key=value'.", value)
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Options sent as query parameters with a request.
///
/// Both named options are optional: without a country the API answers with its
/// default country, and without a year it uses the previous calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InflationRateQuery {
    pub country: Option<String>,
    pub year: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl InflationRateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ISO 2-letter country code. The value is normalized to uppercase.
    pub fn country(mut self, country: impl AsRef<str>) -> Self {
        self.country = Some(country.as_ref().trim().to_ascii_uppercase());
        self
    }

    pub fn year(mut self, year: impl ToString) -> Self {
        self.year = Some(year.to_string().trim().to_string());
        self
    }

    /// Adds an extra query parameter passed through to the API unchanged.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.year.is_none() && self.extra.is_empty()
    }

    /// Checks every option, returning the first problem found.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let Some(country) = &self.country {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(QueryError::InvalidCountry(country.clone()));
            }
        }

        if let Some(year) = &self.year {
            let parsed = if !year.is_empty() && year.chars().all(|c| c.is_ascii_digit()) {
                year.parse::<u32>().ok()
            } else {
                None
            };
            match parsed {
                Some(y) if y >= EARLIEST_YEAR => {}
                _ => return Err(QueryError::InvalidYear(year.clone())),
            }
        }

        for key in self.extra.keys() {
            if key == COUNTRY_PARAM || key == YEAR_PARAM {
                return Err(QueryError::DuplicateParam(key.clone()));
            }
        }

        Ok(())
    }

    /// Query pairs in a stable order: country, year, then extras by key.
    pub fn to_query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(2 + self.extra.len());
        if let Some(country) = &self.country {
            pairs.push((COUNTRY_PARAM, country.as_str()));
        }
        if let Some(year) = &self.year {
            pairs.push((YEAR_PARAM, year.as_str()));
        }
        pairs.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs
    }
}

/// A single `key=value` pair as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

impl FromStr for QueryParam {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(QueryParam {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(QueryError::MalformedParam(s.to_string())),
        }
    }
}
