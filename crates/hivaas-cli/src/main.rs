mod browse;
mod list;
mod render;
mod share;

use clap::{Parser, Subcommand, ValueEnum};
use hivaas_client::{load_catalog, CatalogClient};
use hivaas_core::{CatalogStore, Size, SortOption};
use tracing_subscriber::EnvFilter;

use crate::browse::run_browse;
use crate::list::{run_list, run_types, ListArgs};
use crate::share::run_share;

#[derive(Debug, Parser)]
#[command(name = "hivaas")]
#[command(about = "Browse the Hivaas catalog, build a wishlist, and share it")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Price ordering as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    None,
    LowToHigh,
    HighToLow,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortOption::None,
            SortArg::LowToHigh => SortOption::PriceAscending,
            SortArg::HighToLow => SortOption::PriceDescending,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one page of the catalog
    List {
        /// Keep products with this size available (repeatable, matches any)
        #[arg(long = "size")]
        sizes: Vec<Size>,
        /// Keep products of this type (repeatable, matches any)
        #[arg(long = "type")]
        types: Vec<String>,
        /// Case-insensitive description search
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long, value_enum, default_value = "none")]
        sort: SortArg,
        /// 1-indexed page; out-of-range values clamp
        #[arg(long, default_value = "1")]
        page: usize,
        /// Emit the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the product types available for filtering
    Types,
    /// Build a wishlist and print the share message and link
    Share {
        /// Product and sizes, e.g. `HV101=M,L` (repeatable)
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
    /// Interactive browse session (default)
    Browse,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = hivaas_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::from_config(&config)?;
    let mut store = CatalogStore::new(config.page_size, config.recommended_count);
    eprintln!("{}", render::LOADING_MESSAGE);
    load_catalog(&mut store, &client, &config.catalog_url).await;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::List {
            sizes,
            types,
            keyword,
            sort,
            page,
            json,
        } => {
            let args = ListArgs {
                sizes,
                types,
                keyword,
                sort: sort.into(),
                page,
                json,
            };
            run_list(&mut store, &config, &args)?;
        }
        Commands::Types => run_types(&store),
        Commands::Share { items } => run_share(&store, &config, &items)?,
        Commands::Browse => run_browse(store, &config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
