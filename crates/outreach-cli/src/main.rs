mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outreach_core::EmploymentType;

#[derive(Debug, Parser)]
#[command(name = "outreach-cli")]
#[command(about = "Local-business outreach: search nearby businesses and run hiring calls")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for nearby businesses and print the dashboard table
    Search {
        /// Address or city to search around
        #[arg(long)]
        location: String,

        /// Search radius in kilometers
        #[arg(long)]
        radius_km: Option<f64>,

        /// Optional keyword filter, e.g. "restaurant" or "barista"
        #[arg(long)]
        keyword: Option<String>,

        /// Employment type context for later calls
        #[arg(long, default_value = "any")]
        employment_type: EmploymentType,
    },
    /// Search, call one result row, and poll the call to completion
    Call {
        #[arg(long)]
        location: String,

        #[arg(long)]
        radius_km: Option<f64>,

        #[arg(long)]
        keyword: Option<String>,

        #[arg(long, default_value = "any")]
        employment_type: EmploymentType,

        /// Zero-based row index of the business to call
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Print address autocomplete suggestions for a partial query
    Geocode {
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = outreach_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            location,
            radius_km,
            keyword,
            employment_type,
        } => {
            commands::search(&config, location, radius_km, keyword, employment_type).await?;
        }
        Commands::Call {
            location,
            radius_km,
            keyword,
            employment_type,
            index,
        } => {
            commands::call(&config, location, radius_km, keyword, employment_type, index).await?;
        }
        Commands::Geocode { query } => commands::geocode(&config, &query).await?,
    }

    Ok(())
}
