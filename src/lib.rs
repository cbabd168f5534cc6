//! Client for the APIVerve Inflation Rate API.
//!
//! Retrieves the annual inflation rate, CPI index value, and country details
//! for countries worldwide, for any year going back to 1960.
//!
//! ```no_run
//! use apiverve_inflationrate::{ClientOptions, InflationRateClient, InflationRateQuery};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let options = ClientOptions::new("your-api-key")?;
//! let client = InflationRateClient::new(&options)?;
//!
//! let data = client
//!     .fetch(&InflationRateQuery::new().country("US").year(2023))
//!     .await?;
//! println!("{}: {}%", data.country_name, data.inflation_rate);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod commands;
pub mod config;
pub mod http;
pub mod package;
pub mod query;
pub mod runtime;
pub mod types;

pub use client::{InflationRateApi, InflationRateClient, InflationRateResponse};
pub use config::ClientOptions;
pub use query::InflationRateQuery;
pub use types::{ApiError, ApiResponse, InflationRateData};
