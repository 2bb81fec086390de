//! Product detail command.

use anyhow::Result;
use sprout_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let logger = ctx.logger("show");
    let id = ProductId::parse(&args.product_id)?;

    let catalog = ctx.load_catalog(&logger);
    let product = match catalog.find(id) {
        Ok(product) => product,
        Err(e) => {
            logger
                .warn_builder("product not found")
                .field("product_id", id.to_string())
                .emit();
            return Err(e.into());
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    if let Some(brand) = &product.brand {
        ctx.output.kv("Brand", brand);
    }
    if let Some(style) = &product.style {
        ctx.output.kv("Style", style);
    }
    ctx.output.kv(
        "Price",
        &product
            .price
            .map(format_price)
            .unwrap_or_else(|| "-".to_string()),
    );
    if let Some(description) = &product.description {
        ctx.output.kv("Description", description);
    }
    if let Some(image_url) = &product.image_url {
        ctx.output.kv("Image", image_url);
    }
    for (key, value) in &product.extra {
        ctx.output.kv(key, &value.to_string());
    }

    Ok(())
}
