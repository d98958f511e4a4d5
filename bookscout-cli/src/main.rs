//! Bookscout CLI - search the book catalog from the command line

mod commands;

use anyhow::{Context, Result};
use bookscout_core::{Catalog, CatalogConfig, SearchMode};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a search mode argument
fn parse_mode(s: &str) -> Result<SearchMode, String> {
    s.parse().map_err(|e: bookscout_core::ValidationError| e.to_string())
}

#[derive(Parser)]
#[command(name = "bookscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog origin serving /search.json and /api/books (defaults to Open Library)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for books by title or author
    Search {
        /// Search text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Search by author instead of title
        #[arg(short, long, conflicts_with = "mode")]
        author: bool,

        /// Search mode (title, author)
        #[arg(short, long, default_value = "title", value_parser = parse_mode)]
        mode: SearchMode,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details for a book by ISBN
    Details {
        /// ISBN-10 or ISBN-13, hyphens allowed
        isbn: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Build the catalog configuration from the environment and command-line overrides
    fn catalog_config(&self) -> Result<CatalogConfig> {
        let mut config = CatalogConfig::from_env().context("Invalid BOOKSCOUT_* environment")?;
        if let Some(origin) = &self.catalog_url {
            config = config.with_catalog_origin(origin);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookscout_cli=debug,bookscout_core=debug"
    } else {
        "bookscout_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = Catalog::new(cli.catalog_config()?).context("Failed to set up catalog client")?;

    match cli.command {
        Commands::Search {
            query,
            author,
            mode,
            json,
        } => {
            let mode = if author { SearchMode::Author } else { mode };
            commands::search(&catalog, &query.join(" "), mode, json).await
        }

        Commands::Details { isbn, json } => commands::details(&catalog, &isbn, json).await,
    }
}
