//! arxiv-digest CLI
//!
//! Fetches today's arXiv listings and writes the Priority, Main and Interest
//! pages, or runs individual stages on local input.

use std::path::PathBuf;

use arxiv_digest::{
    error::Result,
    models::Config,
    pipeline,
    services::{ListingParser, normalize},
    storage::LocalOutput,
    utils::http::HttpListingSource,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

/// arxiv-digest - daily arXiv listing digests
#[derive(Parser, Debug)]
#[command(
    name = "arxiv-digest",
    version,
    about = "Daily arXiv new-submission digests as static HTML"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch listings and write the three digest pages
    Run {
        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Date used for file names and headings (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Parse a saved listing page and print its entries as JSON
    Parse {
        /// Path to the listing HTML
        file: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the normalized form of a string
    Normalize { text: String },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run { output, date } => {
            if let Some(dir) = output {
                config.output.dir = dir;
            }
            config.validate()?;

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let source = HttpListingSource::new(&config.fetch)?;
            let output = LocalOutput::new(&config.output.dir);

            log::info!(
                "Building digest for {} into {}",
                date,
                output.root_dir().display()
            );
            let summary = match pipeline::run_digest(&config, &source, &output, date).await {
                Ok(summary) => summary,
                Err(e) => {
                    log::error!("Digest run failed: {}", e);
                    return Err(e);
                }
            };

            log::info!(
                "Done: {} priority, {} main, {} interest entries in {} pages",
                summary.priority_count,
                summary.main_count,
                summary.interest_count,
                summary.pages.len()
            );
        }

        Command::Parse { file, pretty } => {
            let markup = std::fs::read_to_string(&file)?;
            let parser = ListingParser::new(&config.listing, &config.fetch.base_url)?;
            let entries = parser.parse(&markup);
            log::info!("Parsed {} entries from {}", entries.len(), file.display());

            let json = if pretty {
                serde_json::to_string_pretty(&entries)?
            } else {
                serde_json::to_string(&entries)?
            };
            println!("{json}");
        }

        Command::Normalize { text } => {
            println!("{}", normalize(&text));
        }

        Command::Validate => {
            log::info!("Validating {}", cli.config.display());
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
