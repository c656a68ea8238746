//! Drive a live search session from the terminal.

use std::time::Duration;

use anyhow::{Context as _, Result};
use dialoguer::Input;
use storefront_commerce::catalog::{PriceDisplay, PriceSummary};
use storefront_core::{NavigationRequest, RouteState};
use storefront_search::{
    render_results, ClickListeners, FileCatalog, LiveSearch, LiveSearchConfig, SearchSnapshot,
};

use super::SearchArgs;
use crate::context::Context;
use crate::output::price_pair;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let listeners = ClickListeners::new();
    let mut search = LiveSearch::mount(
        LiveSearchConfig::from(&ctx.config),
        &listeners,
        RouteState::new("/"),
    );

    let path = ctx.resolve_path(&args.catalog);
    let spinner = ctx.output.spinner(&format!("Loading catalog from {}", path.display()));
    let loaded = search.load_catalog(&FileCatalog::new(&path)).await;
    spinner.finish_and_clear();
    let count = loaded.with_context(|| format!("Failed to load catalog {}", path.display()))?;
    ctx.output.debug(&format!("{} products loaded", count));

    let gap = Duration::from_millis(args.gap_ms);

    if args.interactive {
        loop {
            let term: String = Input::new()
                .with_prompt("Search")
                .allow_empty(true)
                .interact_text()?;
            if term.is_empty() {
                break;
            }

            type_out(&mut search, &prefixes(&term), gap).await;
            let snapshot = search.settled().await;
            show(&search, &snapshot, args.html, ctx);
        }
        return Ok(());
    }

    type_out(&mut search, &args.terms, gap).await;
    let snapshot = search.settled().await;
    show(&search, &snapshot, args.html, ctx);

    if !ctx.output.is_json() && !search.term().is_empty() {
        let request: NavigationRequest = search.submit();
        ctx.output.kv("Full results", &request.to_url());
    }

    Ok(())
}

/// Feed input values one after another, `gap` apart.
async fn type_out(search: &mut LiveSearch, values: &[String], gap: Duration) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(gap).await;
        }
        search.on_input(value.as_str());
    }
}

/// Every prefix of `term`, as it would appear while typing it.
fn prefixes(term: &str) -> Vec<String> {
    term.char_indices()
        .map(|(i, c)| term[..i + c.len_utf8()].to_string())
        .collect()
}

fn show(search: &LiveSearch, snapshot: &SearchSnapshot, html: bool, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(snapshot);
        return;
    }

    if html {
        ctx.output.markup(&render_results(&search.rows()));
        return;
    }

    if snapshot.results.is_empty() {
        ctx.output.info(&format!("No results for \"{}\"", search.term()));
        return;
    }

    ctx.output.header(&format!(
        "{} result(s) for \"{}\"",
        snapshot.results.len(),
        snapshot.term
    ));
    for product in &snapshot.results {
        let price = match PriceSummary::of(product).display() {
            PriceDisplay::Discounted { was, now } => price_pair(Some(&was.display()), &now.display()),
            PriceDisplay::Regular { price } => price_pair(None, &price.display()),
        };
        ctx.output
            .list_item(&format!("{}  {}  {}", product.name, price, product.href()));
    }
}
