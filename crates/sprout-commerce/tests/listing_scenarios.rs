//! End-to-end listing behavior over a catalog document.

use sprout_commerce::prelude::*;

fn casual_catalog(count: i64) -> Vec<ProductRecord> {
    (1..=count)
        .map(|id| {
            ProductRecord::new(id, format!("Item {id}"))
                .with_style("casual")
                .with_price(1000)
        })
        .collect()
}

#[test]
fn test_first_catalog_page_is_full() {
    let records = casual_catalog(30);

    let page = list_products(&records, &ListingPreset::CATALOG.query());

    assert_eq!(page.len(), 25);
    assert_eq!(page.total_items, 30);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn test_second_catalog_page_holds_the_rest() {
    let records = casual_catalog(30);

    let page = list_products(&records, &ListingPreset::CATALOG.query().with_page(2));

    assert_eq!(page.len(), 5);
    assert!(!page.has_next());
    assert!(page.has_prev());
    assert_eq!(page.items[0].id, ProductId::new(26));
}

#[test]
fn test_search_matches_names() {
    let records = vec![
        ProductRecord::new(1, "Blue Shirt"),
        ProductRecord::new(2, "Red Pants"),
    ];

    let page = list_products(&records, &ListingQuery::new(25).with_search("shirt"));

    let names: Vec<&str> = page.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Blue Shirt"]);
}

#[test]
fn test_price_high_orders_descending() {
    let records: Vec<ProductRecord> = [10, 50, 30]
        .into_iter()
        .enumerate()
        .map(|(i, price)| ProductRecord::new(i as i64 + 1, "P").with_price(price))
        .collect();

    let page = list_products(&records, &ListingQuery::new(25).with_sort(SortKey::PriceHigh));

    let prices: Vec<u64> = page.items.iter().map(ProductRecord::price_or_zero).collect();
    assert_eq!(prices, vec![50, 30, 10]);
}

#[test]
fn test_navigation_elides_far_pages() {
    let nav = navigation(5, 10, NavWindow::ACCOUNT);

    assert_eq!(
        nav.tokens(),
        &[
            NavToken::Page(1),
            NavToken::Gap,
            NavToken::Page(3),
            NavToken::Page(4),
            NavToken::Page(5),
            NavToken::Page(6),
            NavToken::Page(7),
            NavToken::Gap,
            NavToken::Page(10),
        ]
    );
}

#[test]
fn test_page_past_the_end_is_empty() {
    let records = casual_catalog(30);

    let page = list_products(&records, &ListingPreset::CATALOG.query().with_page(99));

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 30);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.navigation(NavWindow::CATALOG).pages(), vec![1, 2]);
}

#[test]
fn test_page_never_exceeds_page_size() {
    let records = casual_catalog(23);

    for page_size in 1..=10 {
        for page in 1..=25 {
            let query = ListingQuery::new(page_size).with_page(page);
            let result = list_products(&records, &query);

            assert!(result.len() <= page_size);
            assert_eq!(result.total_items, 23);
            assert_eq!(result.total_pages, 23usize.div_ceil(page_size));
        }
    }
}

#[test]
fn test_pages_concatenate_to_filtered_sequence() {
    let records: Vec<ProductRecord> = (1..=17i64)
        .map(|id| {
            ProductRecord::new(id, if id % 2 == 0 { "Shirt" } else { "Pants" })
                .with_price((id as u64 * 7) % 5)
        })
        .collect();
    let base = ListingQuery::new(4)
        .with_search("shirt")
        .with_sort(SortKey::PriceLow);

    let all = list_products(&records, &ListingQuery { page_size: 100, ..base.clone() });
    let mut stitched = Vec::new();
    for page in 1..=all.total_items.div_ceil(4) {
        stitched.extend(list_products(&records, &base.clone().with_page(page)).items);
    }

    assert_eq!(stitched, all.items);
}

#[test]
fn test_query_string_through_engine() {
    let catalog = Catalog::from_json_str(
        r#"{"products": [
            {"id": 1, "brand": "Acme", "name": "Blue Shirt", "price": 30000, "style": "casual"},
            {"id": 2, "brand": "Zed", "name": "Red Shirt", "price": 20000, "style": "casual"},
            {"id": 3, "brand": "Acme", "name": "Grey Shirt", "price": 10000, "style": "formal"},
            {"id": 4, "name": "Mystery Shirt"}
        ]}"#,
    )
    .unwrap();

    let query = ListingQuery::from_query_string(
        "search=SHIRT&style=casual&style=formal&brand=Acme&sort=price_low&page=1",
        ListingPreset::CATALOG.page_size,
    );
    let page = list_products(catalog.records(), &query);

    let ids: Vec<i64> = page.items.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![3, 1]);

    let facets = Facets::from_records(catalog.records(), &query);
    assert!(facets.brands.values.iter().any(|v| v.value == "Acme" && v.selected));
}
