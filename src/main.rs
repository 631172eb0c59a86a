//! Listing Harvester main entry point
//!
//! This is the command-line interface for the listing harvester.

use clap::Parser;
use listing_harvester::config::{load_config_with_hash, Config};
use listing_harvester::harvester::harvest;
use listing_harvester::url::{category_url, normalize_category};
use listing_harvester::HarvestError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Listing Harvester: scrape every product of a category into JSON
///
/// The category path is appended to the site base URL. All listing pages of
/// the category are fetched in order and the title, price and image link of
/// each product are written to the output file.
#[derive(Parser, Debug)]
#[command(name = "listing-harvester")]
#[command(version = "1.0.0")]
#[command(about = "Harvest product listings of a category into JSON", long_about = None)]
struct Cli {
    /// Category path, for example arvutid/sulearvutid
    #[arg(value_name = "CATEGORY")]
    category: Option<String>,

    /// Output file
    #[arg(value_name = "OUTPUT", default_value = "products.json")]
    output: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved category URL and selectors without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    (cfg, Some(hash))
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => (Config::default(), None),
    };

    let Some(category) = cli.category.as_deref().and_then(normalize_category) else {
        println!(
            "Harvesting failed, please enter a valid category to harvest as a command line \
             argument, for example arvutid/sulearvutid"
        );
        return Ok(());
    };

    if cli.dry_run {
        handle_dry_run(&config, config_hash.as_deref(), &category, &cli.output)?;
        return Ok(());
    }

    match harvest(config, &category, &cli.output).await {
        Ok(report) => {
            tracing::info!(
                "Harvest completed: {} records from {} pages written to {}",
                report.records,
                report.pages,
                cli.output.display()
            );
            Ok(())
        }
        Err(e @ HarvestError::Reachability { .. }) => {
            // Reported to the user; the process still ends normally
            println!("{}", e);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_harvester=info,warn"),
            1 => EnvFilter::new("listing_harvester=debug,info"),
            _ => EnvFilter::new("listing_harvester=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be harvested
fn handle_dry_run(
    config: &Config,
    config_hash: Option<&str>,
    category: &str,
    output: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = category_url(&config.site.base_url, category)?;
    let selectors = &config.selectors;

    println!("=== Listing Harvester Dry Run ===\n");
    println!("Category URL: {}", url);
    println!(
        "Later pages:  {}{}N",
        url, config.pagination.page_suffix
    );
    println!("Output:       {}", output.display());
    match config_hash {
        Some(hash) => println!("Config hash:  {}", hash),
        None => println!("Config hash:  built-in defaults"),
    }

    println!("\nSelectors:");
    println!(
        "  List:        {} (match #{})",
        selectors.list,
        selectors.list_index + 1
    );
    println!("  Item:        {}", selectors.item);
    println!("  Title:       {} [{}]", selectors.title, selectors.title_attr);
    println!("  Price:       {}", selectors.price);
    println!(
        "  Image:       {} {} [{}]",
        selectors.image_container, selectors.image_anchor, selectors.image_attr
    );
    println!("  Page count:  {}", selectors.page_count);

    match config.http.timeout_secs {
        Some(secs) => println!("\nRequest timeout: {}s", secs),
        None => println!("\nRequest timeout: none"),
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}
