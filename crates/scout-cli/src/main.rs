mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scout-cli")]
#[command(about = "Charity scout command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape contact details and opening hours from a website
    Scrape {
        /// Page URL to fetch
        url: String,
    },
    /// Search for charities by free-text query
    Search {
        /// What to look for, e.g. "food bank"
        query: String,
        /// Appended to the query unless already present
        #[arg(long, default_value = scout_places::DEFAULT_LOCATION)]
        location: String,
    },
    /// Fetch details and weekly opening hours for one place
    Details {
        /// Place identifier returned by `search`
        place_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape { url } => lookup::run_scrape(&url).await,
        Commands::Search { query, location } => lookup::run_search(&query, &location).await,
        Commands::Details { place_id } => lookup::run_details(&place_id).await,
    }
}
