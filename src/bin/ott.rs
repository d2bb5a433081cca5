use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ott_catalog::catalog::config::page_size_from_env;
use ott_catalog::catalog::{FilterState, PlatformSelection};
use ott_catalog::cli::{render_normalized, SourceOverrides};
use ott_catalog::util::env;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ott", version, about = "Browse OTT movie releases by title and platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Catalog endpoint (defaults to OTT_CATALOG_URL or the public backend)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,
    /// Read a saved JSON snapshot instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,
    /// HTTP timeout in seconds (defaults to OTT_HTTP_TIMEOUT_SECS or 30)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Render a page of the filtered catalog as a table
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Case-insensitive title substring
        #[arg(long, short, default_value = "")]
        search: String,
        /// Canonical platform name, or "All"
        #[arg(long, short, default_value = "All")]
        platform: String,
        /// One-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page (defaults to OTT_PAGE_SIZE or 20)
        #[arg(long)]
        per_page: Option<usize>,
        /// Emit the page as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the ranked platform vocabulary
    Platforms {
        #[command(flatten)]
        source: SourceArgs,
        /// Include occurrence counts
        #[arg(long, default_value_t = false)]
        counts: bool,
    },
    /// Show how raw platform fields normalize
    Normalize {
        /// Raw platform fields, e.g. "Jio Cinema and Zee5"
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

impl From<SourceArgs> for SourceOverrides {
    fn from(args: SourceArgs) -> Self {
        Self {
            url: args.url,
            file: args.file,
            timeout_secs: args.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env::init_env();
    ott_catalog::tracing::init_tracing(ott_catalog::tracing::DEFAULT_LOG_FILTER)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            source,
            search,
            platform,
            page,
            per_page,
            json,
        } => {
            use ott_catalog::cli::list::{run, ListConfig};
            let cfg = ListConfig {
                source: SourceOverrides::from(source).resolve()?,
                filter: FilterState::new(search, PlatformSelection::parse(&platform)),
                page,
                per_page: per_page.unwrap_or_else(page_size_from_env),
                json,
            };
            run(cfg).await?;
        }
        Commands::Platforms { source, counts } => {
            use ott_catalog::cli::platforms::{run, PlatformsConfig};
            let cfg = PlatformsConfig {
                source: SourceOverrides::from(source).resolve()?,
                counts,
            };
            run(cfg).await?;
        }
        Commands::Normalize { fields } => {
            print!("{}", render_normalized(&fields));
        }
    }
    Ok(())
}
