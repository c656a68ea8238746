//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use storefront_core::StorefrontConfig;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration, with environment overrides applied.
    pub config: StorefrontConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from a config file, or the nearest one found upwards
    /// from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(cwd.join(path)),
            None => StorefrontConfig::discover(&cwd),
        };

        let config = match &config_path {
            Some(path) => StorefrontConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => StorefrontConfig::default(),
        };

        let config = config
            .with_env_overrides()
            .context("Invalid STOREFRONT_* environment variable")?;

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.cwd.join(path)
    }
}
