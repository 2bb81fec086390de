//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde::Serialize;
use sprout_commerce::cart::{
    account_page, add_to_cart, cart_records, check_cart, remove_from_cart, AddOutcome, CartStore,
    Shopper,
};
use sprout_commerce::{CommerceError, ProductId};
use sprout_observability::StructuredLogger;

use super::browse::render_page;
use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Reply shape of the add and remove endpoints.
#[derive(Serialize)]
struct CartReply {
    success: bool,
    message: String,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let shopper = args.shopper.shopper();
    let shopper = shopper.as_ref();

    match args.command {
        CartCommand::Add { product_id } => add(&product_id, shopper, ctx),
        CartCommand::Remove { product_id } => remove(&product_id, shopper, ctx),
        CartCommand::Check => check(shopper, ctx),
        CartCommand::View { page } => view(page, shopper, ctx),
        CartCommand::Clear { yes } => clear(yes, shopper, ctx),
    }
}

fn shopper_logger(ctx: &Context, operation: &str, shopper: Option<&Shopper>) -> StructuredLogger {
    let logger = ctx.logger(operation);
    if let Some(shopper) = shopper {
        logger
            .debug_builder("acting for shopper")
            .field("user_id", shopper.id.to_string())
            .field("username", shopper.username.as_str())
            .emit();
    }
    logger
}

fn reply(ctx: &Context, message: &str) {
    if ctx.output.is_json() {
        ctx.output.json(&CartReply {
            success: true,
            message: message.to_string(),
        });
    } else {
        ctx.output.success(message);
    }
}

fn add(product_id: &str, shopper: Option<&Shopper>, ctx: &Context) -> Result<()> {
    let logger = shopper_logger(ctx, "cart_add", shopper);
    let id = ProductId::parse(product_id)?;

    let catalog = ctx.load_catalog(&logger);
    let mut store = ctx.open_cart_store()?;

    match add_to_cart(&mut store, &catalog, shopper, id)? {
        AddOutcome::Added(item) => {
            logger
                .info_builder("cart item added")
                .field("product_id", id.to_string())
                .field("cart_item_id", item.id.to_string())
                .field("store", store.path().display().to_string())
                .emit();
            reply(ctx, "Added to cart");
        }
        AddOutcome::AlreadyInCart => {
            logger
                .debug_builder("cart item already present")
                .field("product_id", id.to_string())
                .emit();
            reply(ctx, "Already in cart");
        }
    }

    Ok(())
}

fn remove(product_id: &str, shopper: Option<&Shopper>, ctx: &Context) -> Result<()> {
    let logger = shopper_logger(ctx, "cart_remove", shopper);
    let id = ProductId::parse(product_id)?;
    let mut store = ctx.open_cart_store()?;

    remove_from_cart(&mut store, shopper, id)?;

    logger
        .info_builder("cart item removed")
        .field("product_id", id.to_string())
        .emit();
    reply(ctx, "Removed from cart");

    Ok(())
}

fn check(shopper: Option<&Shopper>, ctx: &Context) -> Result<()> {
    let logger = shopper_logger(ctx, "cart_check", shopper);
    let store = ctx.open_cart_store()?;
    let result = check_cart(&store, shopper)?;

    logger
        .debug_builder("cart checked")
        .field_bool("logged_in", result.logged_in)
        .field_u64("items", result.cart_items.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    if !result.logged_in {
        ctx.output.info("Not signed in; pass --user to see a cart");
        return Ok(());
    }
    if result.cart_items.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    ctx.output.header("Products in cart");
    for id in &result.cart_items {
        ctx.output.list_item(&id.to_string());
    }

    Ok(())
}

fn view(page: usize, shopper: Option<&Shopper>, ctx: &Context) -> Result<()> {
    ctx.ensure_valid()?;
    let logger = shopper_logger(ctx, "cart_view", shopper);
    let preset = ctx.config.listing.account_preset();

    let catalog = ctx.load_catalog(&logger);
    let store = ctx.open_cart_store()?;
    let resolution = cart_records(&store, &catalog, shopper)?;

    for id in &resolution.skipped {
        logger
            .warn_builder("cart item skipped: product no longer exists")
            .field("product_id", id.to_string())
            .emit();
    }

    let page = account_page(&resolution, &preset, page);
    let navigation = page.navigation(preset.window);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "page": page,
            "navigation": navigation,
            "skipped": resolution.skipped,
        }));
        return Ok(());
    }

    if let Some(shopper) = shopper {
        ctx.output.header(&format!("{}'s cart", shopper.username));
    }
    if page.total_items == 0 {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }
    render_page(&ctx.output, &page, &navigation);

    Ok(())
}

fn clear(yes: bool, shopper: Option<&Shopper>, ctx: &Context) -> Result<()> {
    let Some(shopper) = shopper else {
        return Err(CommerceError::LoginRequired.into());
    };
    let logger = shopper_logger(ctx, "cart_clear", Some(shopper));

    if !yes {
        if ctx.output.is_json() {
            bail!("Refusing to clear the cart without --yes in JSON mode");
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Remove every product from {}'s cart?", shopper.username))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    let mut store = ctx.open_cart_store()?;
    let cleared = store.clear(shopper.id)?;

    logger
        .info_builder("cart cleared")
        .field_u64("removed", cleared as u64)
        .emit();
    reply(ctx, &format!("Removed {} item(s) from cart", cleared));

    Ok(())
}
