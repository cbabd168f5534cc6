use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::{
    client::{InflationRateApi, InflationRateResponse},
    query::{InflationRateQuery, QueryParam},
    types::InflationRateData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// The full response envelope, pretty-printed
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub country: Option<String>,
    pub year: Option<String>,
    pub params: Vec<QueryParam>,
    pub format: OutputFormat,
}

impl GetOptions {
    pub fn to_query(&self) -> InflationRateQuery {
        let mut query = InflationRateQuery::new();
        if let Some(country) = &self.country {
            query = query.country(country);
        }
        if let Some(year) = &self.year {
            query = query.year(year);
        }
        for param in &self.params {
            query = query.param(&param.key, &param.value);
        }
        query
    }
}

/// Fetch inflation data and print it to stdout
#[tracing::instrument(skip(api))]
pub async fn get<A: InflationRateApi>(api: &A, options: &GetOptions) -> Result<()> {
    let query = options.to_query();
    debug!("Fetching {:?} from {}", query, api.endpoint());

    let response = api.execute(&query).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match options.format {
        OutputFormat::Json => print_response_json(&response, &mut out),
        OutputFormat::Text => {
            let data = response.into_result()?;
            print_data(&data, &mut out)
        }
    }
}

fn print_response_json<W: Write>(response: &InflationRateResponse, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, response)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_data<W: Write>(data: &InflationRateData, out: &mut W) -> Result<()> {
    writeln!(out, "Country: {} ({})", data.country_name, data.country)?;
    writeln!(out, "Year: {}", data.year)?;
    writeln!(out, "Inflation rate: {:.2}%", data.inflation_rate)?;
    writeln!(
        out,
        "CPI index: {:.2} (base year {})",
        data.cpi_index, data.cpi_base_year
    )?;
    writeln!(out, "Last updated: {}", data.last_updated)?;
    Ok(())
}
