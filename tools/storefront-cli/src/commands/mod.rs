//! CLI command implementations.

pub mod config;
pub mod countdown;
pub mod search;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Successive input values, typed as one burst (e.g. `ru run runn`).
    #[arg(required_unless_present = "interactive")]
    pub terms: Vec<String>,

    /// Catalog response body (JSON with a `data` array).
    #[arg(long, default_value = "catalog.json")]
    pub catalog: String,

    /// Delay between input values, in milliseconds.
    #[arg(long, default_value_t = 10)]
    pub gap_ms: u64,

    /// Prompt for terms until an empty line is entered.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the dropdown markup instead of a summary.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    /// Wishlist file (JSON array of saved items).
    pub file: String,

    /// Move the item with this slug to the cart and save the file.
    #[arg(long, value_name = "SLUG")]
    pub move_to_cart: Option<String>,

    /// Print the wishlist table markup instead of a summary.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the countdown command.
#[derive(Args)]
pub struct CountdownArgs {
    /// Deadline as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: Option<String>,

    /// Use the single-line banner layout.
    #[arg(long)]
    pub compact: bool,

    /// Print the banner markup.
    #[arg(long)]
    pub html: bool,

    /// Extra CSS class for the full banner.
    #[arg(long, default_value = "")]
    pub class: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default storefront.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the configuration for errors.
    Validate,
}
