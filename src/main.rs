//! # Wine List CLI (`winelist`)
//!
//! The `winelist` binary loads the wine catalog and either prints derived
//! views or serves them over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! winelist --config ./config/winelist.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `winelist wines` | List wines, optionally filtered by type, region, and search text |
//! | `winelist regions` | List regions with their wine counts |
//! | `winelist show <id>` | Show one wine in detail |
//! | `winelist page <page>` | Render a whole page for a URL query string |
//! | `winelist stats` | Summarize the loaded catalog |
//! | `winelist serve` | Start the JSON HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Sparkling wines from Lombardia
//! winelist wines --type SPARKLING --region LOMBARDIA
//!
//! # Free-text search across name, region, and varietals
//! winelist wines --search sangiovese
//!
//! # Use a catalog file without writing a config
//! winelist --catalog ./data/wines.json regions
//!
//! # What the wines page shows for a given URL
//! winelist page wines --query "?region=TOSCANA&type=RED" --json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wine_list::core::{FilterState, PageContext, WineType};
use wine_list::{browse, config, loader, server, show, stats};

/// Wine List CLI: browse and serve a restaurant wine list.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "winelist",
    about = "Wine List — browse, filter, and serve a restaurant wine list",
    version,
    long_about = "Wine List loads a static JSON catalog of wines and derives filtered lists, \
    region indexes, and detail views from it, printed on the command line or served as JSON."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/winelist.toml")]
    config: PathBuf,

    /// Catalog file or URL, overriding `[catalog].source`.
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List wines.
    ///
    /// All filters combine; without any, every wine is listed in catalog
    /// order.
    Wines {
        /// Only wines of this type: RED, WHITE, ROSE, or SPARKLING.
        #[arg(long = "type")]
        wine_type: Option<WineType>,

        /// Only wines from exactly this region.
        #[arg(long)]
        region: Option<String>,

        /// Case-insensitive text to find in name, region, or varietals.
        #[arg(long)]
        search: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List regions with wine counts.
    ///
    /// Counts always cover the whole catalog; `--search` only narrows which
    /// regions are listed.
    Regions {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show one wine by id.
    Show {
        /// Wine id, compared exactly.
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Render a page as it would appear for a URL query string.
    Page {
        /// Page context: home, regions, wines, or detail.
        page: PageContext,

        /// URL query string, e.g. `type=RED&region=TOSCANA` or `id=W123`.
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Summarize the loaded catalog.
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Start the JSON HTTP server.
    ///
    /// Binds to the address configured in `[server].bind`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        tracing::debug!(path = %cli.config.display(), "no config file, using defaults");
        config::Config::minimal()
    };
    if let Some(source) = cli.catalog {
        cfg.catalog.source = source;
    }

    let loaded = loader::load_catalog(&cfg.catalog).await;
    let links = cfg.links.link_builder();

    match cli.command {
        Commands::Wines {
            wine_type,
            region,
            search,
            json,
        } => {
            let filter = FilterState {
                type_filter: wine_type,
                region_filter: region,
                search_text: search,
            };
            browse::run_wines(&loaded, &links, filter, json)?;
        }
        Commands::Regions { search, json } => {
            browse::run_regions(&loaded, &links, search, json)?;
        }
        Commands::Show { id, json } => {
            show::run_show(&loaded, &links, &id, json)?;
        }
        Commands::Page { page, query, json } => {
            if !browse::run_page(&loaded, &links, page, &query, json)? {
                std::process::exit(1);
            }
        }
        Commands::Stats { json } => {
            stats::run_stats(&loaded, json)?;
        }
        Commands::Serve => {
            server::run_server_with_catalog(&cfg, loaded).await?;
        }
    }

    Ok(())
}
