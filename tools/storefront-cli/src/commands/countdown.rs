//! Promo countdown banner.

use anyhow::Result;
use chrono::Utc;
use storefront_commerce::promo::{Countdown, CountdownStyle};

use super::CountdownArgs;
use crate::context::Context;

/// Run the countdown command.
pub async fn run(args: CountdownArgs, ctx: &Context) -> Result<()> {
    let countdown = match &args.date {
        Some(date) => Countdown::parse(date)?,
        None => Countdown::default(),
    };

    let now = Utc::now();
    let remaining = countdown.remaining_at(now);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "deadline": countdown.deadline(),
            "remaining": remaining,
        }));
        return Ok(());
    }

    let style = if args.compact {
        CountdownStyle::Compact
    } else {
        CountdownStyle::Full
    };

    if args.html {
        ctx.output.markup(&countdown.render_at(now, style, &args.class));
        return Ok(());
    }

    ctx.output.kv("Deadline", &countdown.deadline().to_rfc3339());
    if remaining.completed {
        ctx.output.warn(&remaining.to_string());
    } else if args.compact {
        ctx.output.info(&format!("Offer Ends In: {}", remaining));
    } else {
        ctx.output.info(&remaining.to_string());
    }

    Ok(())
}
