//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use storefront_core::{generate_default_config, CONFIG_FILE_NAMES};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv(
        "product_url",
        ctx.config.api.product_url.as_deref().unwrap_or("(unset)"),
    );
    // Never echo the token itself.
    let token = if ctx.config.api.product_token.is_some() {
        "(set)"
    } else {
        "(unset)"
    };
    ctx.output.kv("product_token", token);

    ctx.output.info("[images]");
    ctx.output.kv("base_url", &ctx.config.images.base_url);

    ctx.output.info("[search]");
    ctx.output.kv("debounce_ms", &ctx.config.search.debounce_ms.to_string());
    ctx.output.kv("min_chars", &ctx.config.search.min_chars.to_string());
    ctx.output.kv("results_path", &ctx.config.search.results_path);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    tokio::fs::write(&config_path, generate_default_config())
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;
    ctx.output.success("Configuration is valid");
    Ok(())
}
