use anyhow::Result;
use apiverve_inflationrate::{
    client::InflationRateClient,
    commands::{self, GetOptions, OutputFormat},
    config::ClientOptions,
    query::QueryParam,
    runtime::RealRuntime,
};
use clap::Parser;

/// inflationrate - annual inflation rate and CPI data by country
///
/// Retrieves the inflation rate, CPI index value, and country details
/// for any year going back to 1960 from the APIVerve Inflation Rate API.
///
/// The API key is read from --api-key or the APIVERVE_API_KEY environment variable.
///
/// Examples:
///   inflationrate get --country US --year 2023
///   inflationrate get --country GB --json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// APIVerve API key
    #[arg(
        long = "api-key",
        env = "APIVERVE_API_KEY",
        value_name = "KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// Endpoint URL (defaults to https://api.apiverve.com/v1/inflationrate)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Use plain http instead of https for the default endpoint
    #[arg(long, global = true)]
    pub insecure: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Get the inflation rate for a country and year
    Get(GetArgs),

    /// Show package information
    Info(InfoArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// ISO 2-letter country code (e.g. US, GB, JP, DE, BR)
    #[arg(long, short = 'c', value_name = "CODE")]
    pub country: Option<String>,

    /// Year to retrieve data for (defaults to the previous year)
    #[arg(long, short = 'y', value_name = "YEAR")]
    pub year: Option<String>,

    /// Extra query parameter passed to the API
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE")]
    pub params: Vec<QueryParam>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get(args) => {
            let mut options = ClientOptions::resolve(&RealRuntime, cli.api_key)?
                .secure(!cli.insecure);
            if let Some(url) = cli.api_url {
                options = options.api_url(url);
            }
            let client = InflationRateClient::new(&options)?;

            let get_options = GetOptions {
                country: args.country,
                year: args.year,
                params: args.params,
                format: if args.json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            };
            commands::get(&client, &get_options).await?
        }
        Commands::Info(args) => commands::info(args.json)?,
    }
    Ok(())
}
