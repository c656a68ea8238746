//! Storefront configuration.
//!
//! Values come from a `storefront.toml` (or JSON) file and are then
//! overridden by `STOREFRONT_*` environment variables. Deployment-specific
//! values (API URL, token, image host) are normally only set through the
//! environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Product API base URL.
pub const ENV_PRODUCT_URL: &str = "STOREFRONT_PRODUCT_URL";
/// Product API access token.
pub const ENV_PRODUCT_TOKEN: &str = "STOREFRONT_PRODUCT_TOKEN";
/// Base URL that product image paths are appended to.
pub const ENV_IMAGE_BASE_URL: &str = "STOREFRONT_PRODUCT_IMAGE_BASEURL";
/// Debounce window for live search, in milliseconds.
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "STOREFRONT_SEARCH_DEBOUNCE_MS";
/// Minimum number of characters before live search runs.
pub const ENV_SEARCH_MIN_CHARS: &str = "STOREFRONT_SEARCH_MIN_CHARS";

/// File names probed by [`StorefrontConfig::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Product API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Image hosting settings.
    #[serde(default)]
    pub images: ImageConfig,

    /// Live search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Product API settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product catalog endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    /// Bearer token for the catalog endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_token: Option<String>,
}

/// Image hosting settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base URL for product images. An empty base yields relative paths.
    #[serde(default)]
    pub base_url: String,
}

impl ImageConfig {
    /// Build the URL for a product image path.
    pub fn product_image_url(&self, image: &str) -> String {
        format!(
            "{}/products/{}",
            self.base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}

/// Live search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before filtering runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Terms shorter than this clear the results instead of searching.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Route that a submitted search navigates to.
    #[serde(default = "default_results_path")]
    pub results_path: String,
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_min_chars() -> usize {
    3
}

fn default_results_path() -> String {
    "/shop".to_string()
}

impl SearchConfig {
    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_chars: default_min_chars(),
            results_path: default_results_path(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded storefront config");
        Ok(config)
    }

    /// Find a config file in `start` or any parent directory.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_PRODUCT_URL) {
            self.api.product_url = Some(url);
        }
        if let Some(token) = lookup(ENV_PRODUCT_TOKEN) {
            self.api.product_token = Some(token);
        }
        if let Some(base) = lookup(ENV_IMAGE_BASE_URL) {
            self.images.base_url = base;
        }
        if let Some(raw) = lookup(ENV_SEARCH_DEBOUNCE_MS) {
            self.search.debounce_ms = parse_env(ENV_SEARCH_DEBOUNCE_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEARCH_MIN_CHARS) {
            self.search.min_chars = parse_env(ENV_SEARCH_MIN_CHARS, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search.min_chars == 0 {
            return Err(ConfigError::Invalid(
                "search.min_chars must be at least 1".to_string(),
            ));
        }
        if !self.search.results_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "search.results_path must be absolute, got {:?}",
                self.search.results_path
            )));
        }
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Generate a starter `storefront.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration
#
# Deployment-specific values are usually supplied through the environment:
#   {ENV_PRODUCT_URL}, {ENV_PRODUCT_TOKEN}, {ENV_IMAGE_BASE_URL}

[api]
# product_url = "https://api.example.com/products"

[images]
base_url = ""

[search]
debounce_ms = {debounce}
min_chars = {min_chars}
results_path = "{results_path}"
"#,
        debounce = default_debounce_ms(),
        min_chars = default_min_chars(),
        results_path = default_results_path(),
    )
}
