//! Catalog listing command.

use anyhow::Result;
use serde::Serialize;
use sprout_commerce::catalog::{Facet, Facets, ProductRecord};
use sprout_commerce::search::{list_products, ListingQuery, Page, PageNavigation};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_price, truncate, Output};

#[derive(Serialize)]
struct BrowseView<'a> {
    query: &'a ListingQuery,
    page: &'a Page,
    navigation: &'a PageNavigation,
    facets: &'a Facets,
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    ctx.ensure_valid()?;
    let preset = ctx.config.listing.catalog_preset();
    let query = args.to_query(preset.page_size);
    let logger = ctx.logger("browse");

    logger
        .info_builder("listing requested")
        .field("search", query.normalized_search().unwrap_or_default())
        .field_list("styles", &query.styles)
        .field_list("brands", &query.brands)
        .field("sort", query.sort_key.as_str())
        .field_u64("page", query.page as u64)
        .emit();

    let catalog = ctx.load_catalog(&logger);
    let page = list_products(catalog.records(), &query);
    let navigation = page.navigation(preset.window);
    let facets = Facets::from_records(catalog.records(), &query);

    logger
        .debug_builder("listing served")
        .field_u64("total_items", page.total_items as u64)
        .field_u64("total_pages", page.total_pages as u64)
        .field_u64("shown", page.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&BrowseView {
            query: &query,
            page: &page,
            navigation: &navigation,
            facets: &facets,
        });
        return Ok(());
    }

    ctx.output.header("Products");
    if let Some(search) = query.normalized_search() {
        ctx.output.kv("Search", &search);
    }
    ctx.output.kv("Sort", query.sort_key.display_name());

    render_page(&ctx.output, &page, &navigation);

    ctx.output.blank();
    render_facet(&ctx.output, &facets.brands);
    render_facet(&ctx.output, &facets.styles);

    Ok(())
}

/// Print a listing page and its pager.
pub fn render_page(output: &Output, page: &Page, navigation: &PageNavigation) {
    output.blank();

    if page.is_empty() {
        if page.total_items == 0 {
            output.info("No products found");
        } else {
            output.info(&format!(
                "Page {} is past the end ({} pages)",
                page.page_number, page.total_pages
            ));
        }
        output.pager(navigation, page.page_number);
        return;
    }

    let widths = [6, 14, 36, 10, 10];
    output.table_row(&["ID", "BRAND", "NAME", "STYLE", "PRICE"], &widths);
    for record in &page.items {
        let row = row_for(record);
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        output.table_row(&cols, &widths);
    }

    output.blank();
    output.info(&format!(
        "Showing {}-{} of {} (page {} of {})",
        page.start_item(),
        page.end_item(),
        page.total_items,
        page.page_number,
        page.total_pages
    ));
    output.pager(navigation, page.page_number);
}

fn row_for(record: &ProductRecord) -> [String; 5] {
    [
        record.id.to_string(),
        truncate(record.brand.as_deref().unwrap_or("-"), 14),
        truncate(&record.name, 36),
        truncate(record.style.as_deref().unwrap_or("-"), 10),
        record
            .price
            .map(format_price)
            .unwrap_or_else(|| "-".to_string()),
    ]
}

fn render_facet(output: &Output, facet: &Facet) {
    if facet.values.is_empty() {
        return;
    }

    let values: Vec<String> = facet
        .values
        .iter()
        .map(|v| {
            let label = format!("{} ({})", v.value, v.count);
            if v.selected {
                format!("*{}", label)
            } else {
                label
            }
        })
        .collect();
    output.kv(&facet.name, &values.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_missing_fields() {
        let row = row_for(&ProductRecord::new(9, "Plain Tee"));
        assert_eq!(row, ["9", "-", "Plain Tee", "-", "-"].map(String::from));

        let priced = ProductRecord::new(10, "Blue Shirt")
            .with_brand("Acme")
            .with_price(30000);
        assert_eq!(row_for(&priced)[4], "30,000");
        assert_eq!(row_for(&priced)[1], "Acme");
    }
}
