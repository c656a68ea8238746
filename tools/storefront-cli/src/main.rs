//! Storefront CLI - Drive the storefront search, wishlist and promo logic
//! from the terminal.
//!
//! Commands:
//! - `storefront search` - Type terms into a live search box and print the results
//! - `storefront wishlist` - Show a saved wishlist, or move an item to the cart
//! - `storefront countdown` - Show the time left on a promo deadline
//! - `storefront config` - Manage configuration

mod commands;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, CountdownArgs, SearchArgs, WishlistArgs};

/// Storefront CLI - Live search, wishlist and promo banners
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog the way the header search box does
    Search(SearchArgs),

    /// Show or update a saved wishlist
    Wishlist(WishlistArgs),

    /// Show the time left until a promo deadline
    Countdown(CountdownArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json)?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Wishlist(args) => commands::wishlist::run(args, &ctx).await,
        Commands::Countdown(args) => commands::countdown::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
