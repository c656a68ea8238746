//! Tracing subscriber setup.

use anyhow::{Context as _, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
///
/// `RUST_LOG` wins over the defaults (`warn`, or `debug` with `--verbose`).
pub fn init(verbose: bool, json: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(verbose)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.context("Failed to install tracing subscriber")
}
