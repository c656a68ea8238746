//! Wishlist display and cart moves.

use anyhow::{Context as _, Result};
use storefront_commerce::wishlist::{render_wishlist, Wishlist, WishlistPrice, EMPTY_WISHLIST_MESSAGE};

use super::WishlistArgs;
use crate::context::Context;
use crate::output::{price_pair, stock_badge};

/// Run the wishlist command.
pub async fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut wishlist =
        Wishlist::from_json(&content).with_context(|| format!("Invalid wishlist {}", path.display()))?;

    if let Some(slug) = &args.move_to_cart {
        let line = wishlist.move_to_cart(slug)?;

        let saved = serde_json::to_string_pretty(&wishlist)?;
        tokio::fs::write(&path, saved)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if ctx.output.is_json() {
            ctx.output.json(&line);
        } else {
            ctx.output.success(&format!(
                "Moved {} x {} to the cart at {}",
                line.quantity,
                line.name,
                line.unit_price.display()
            ));
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&wishlist);
        return Ok(());
    }

    if args.html {
        let images = &ctx.config.images;
        ctx.output
            .markup(&render_wishlist(&wishlist, |image| images.product_image_url(image)));
        return Ok(());
    }

    if wishlist.is_empty() {
        ctx.output.info(EMPTY_WISHLIST_MESSAGE);
        return Ok(());
    }

    ctx.output.header(&format!("Wishlist ({} items)", wishlist.len()));
    for item in wishlist.items() {
        let price = match item.price_display() {
            WishlistPrice::Single { price } => price_pair(None, &price.display()),
            WishlistPrice::SaleAndRegular { sale, regular } => {
                price_pair(Some(&regular.display()), &sale.display())
            }
        };
        let action = item
            .cart_action()
            .map(|action| action.label())
            .unwrap_or("-");

        ctx.output.list_item(&format!(
            "{} [{}]  {}  {}  {}",
            item.name(),
            item.slug,
            price,
            stock_badge(item.stock_status()),
            action
        ));
    }

    Ok(())
}
