//! Cart operations behind the cart endpoints and the account page.

use crate::cart::{CartItem, CartStore, Shopper};
use crate::catalog::{ProductLookup, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{list_products, ListingPreset, Page};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Result of adding a product to a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new row was stored.
    Added(CartItem),
    /// The product was already in the cart; nothing changed.
    AlreadyInCart,
}

/// Which products a visitor has in their cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCheck {
    /// Product ids in the cart, newest first.
    pub cart_items: Vec<ProductId>,
    pub logged_in: bool,
}

/// Cart rows resolved to listing records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartResolution {
    /// Records, newest cart row first.
    pub records: Vec<ProductRecord>,
    /// Rows whose product no longer exists and had no usable snapshot.
    pub skipped: Vec<ProductId>,
}

fn signed_in(shopper: Option<&Shopper>) -> Result<&Shopper, CommerceError> {
    shopper.ok_or(CommerceError::LoginRequired)
}

/// Add `product_id` to the shopper's cart, snapshotting the product.
///
/// Adding a product that is already in the cart is not an error.
pub fn add_to_cart<S, P>(
    store: &mut S,
    products: &P,
    shopper: Option<&Shopper>,
    product_id: ProductId,
) -> Result<AddOutcome, CommerceError>
where
    S: CartStore + ?Sized,
    P: ProductLookup + ?Sized,
{
    let shopper = signed_in(shopper)?;

    if store.find(shopper.id, product_id)?.is_some() {
        return Ok(AddOutcome::AlreadyInCart);
    }

    let product = products
        .product(product_id)
        .ok_or(CommerceError::ProductNotFound(product_id))?;

    let item = store.insert(CartItem::snapshot(shopper, &product, Utc::now()))?;
    Ok(AddOutcome::Added(item))
}

/// Remove `product_id` from the shopper's cart.
pub fn remove_from_cart<S>(
    store: &mut S,
    shopper: Option<&Shopper>,
    product_id: ProductId,
) -> Result<(), CommerceError>
where
    S: CartStore + ?Sized,
{
    let shopper = signed_in(shopper)?;

    if store.remove(shopper.id, product_id)? {
        Ok(())
    } else {
        Err(CommerceError::ItemNotInCart(product_id))
    }
}

/// List the product ids in the visitor's cart.
///
/// Anonymous visitors get an empty list rather than an error.
pub fn check_cart<S>(store: &S, shopper: Option<&Shopper>) -> Result<CartCheck, CommerceError>
where
    S: CartStore + ?Sized,
{
    let Some(shopper) = shopper else {
        return Ok(CartCheck::default());
    };

    Ok(CartCheck {
        cart_items: store
            .items_for(shopper.id)?
            .iter()
            .map(|item| item.product_id)
            .collect(),
        logged_in: true,
    })
}

/// Resolve the shopper's cart rows to listing records, newest first.
///
/// A row with a usable snapshot is shown from the snapshot. Otherwise the
/// product is looked up; if it is gone the row is skipped.
pub fn cart_records<S, P>(
    store: &S,
    products: &P,
    shopper: Option<&Shopper>,
) -> Result<CartResolution, CommerceError>
where
    S: CartStore + ?Sized,
    P: ProductLookup + ?Sized,
{
    let shopper = signed_in(shopper)?;
    let mut resolution = CartResolution::default();

    for item in store.items_for(shopper.id)? {
        if item.has_snapshot() {
            resolution.records.push(item.to_record());
        } else if let Some(product) = products.product(item.product_id) {
            resolution.records.push(product);
        } else {
            resolution.skipped.push(item.product_id);
        }
    }

    Ok(resolution)
}

/// One page of the account cart view, in cart order.
///
/// Callers normally pass `ListingPreset::ACCOUNT`.
pub fn account_page(resolution: &CartResolution, preset: &ListingPreset, page: usize) -> Page {
    let query = preset.query().with_page(page);
    list_products(&resolution.records, &query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::InMemoryCartStore;
    use crate::catalog::Catalog;
    use crate::ids::UserId;

    fn catalog() -> Catalog {
        Catalog::new(
            (1..=5i64)
                .map(|id| {
                    ProductRecord::new(id, format!("Product {id}"))
                        .with_brand("Acme")
                        .with_price(id as u64 * 1000)
                })
                .collect(),
        )
    }

    fn mina() -> Shopper {
        Shopper::new(1, "mina")
    }

    #[test]
    fn test_add_requires_login() {
        let mut store = InMemoryCartStore::new();

        let err = add_to_cart(&mut store, &catalog(), None, ProductId::new(1)).unwrap_err();
        assert!(matches!(err, CommerceError::LoginRequired));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_snapshots_product() {
        let mut store = InMemoryCartStore::new();
        let shopper = mina();

        let outcome = add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(2)).unwrap();

        let item = match outcome {
            AddOutcome::Added(item) => item,
            other => panic!("expected a new cart row, got {other:?}"),
        };
        assert_eq!(item.username, "mina");
        assert_eq!(item.name.as_deref(), Some("Product 2"));
        assert_eq!(item.price, Some(2000));
    }

    #[test]
    fn test_add_twice_is_idempotent() {
        let mut store = InMemoryCartStore::new();
        let shopper = mina();

        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(2)).unwrap();
        let again = add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(2)).unwrap();

        assert_eq!(again, AddOutcome::AlreadyInCart);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut store = InMemoryCartStore::new();

        let err = add_to_cart(&mut store, &catalog(), Some(&mina()), ProductId::new(42)).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id.get() == 42));
    }

    #[test]
    fn test_remove() {
        let mut store = InMemoryCartStore::new();
        let shopper = mina();
        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(3)).unwrap();

        remove_from_cart(&mut store, Some(&shopper), ProductId::new(3)).unwrap();
        let err = remove_from_cart(&mut store, Some(&shopper), ProductId::new(3)).unwrap_err();

        assert!(matches!(err, CommerceError::ItemNotInCart(_)));
        assert!(matches!(
            remove_from_cart(&mut store, None, ProductId::new(3)),
            Err(CommerceError::LoginRequired)
        ));
    }

    #[test]
    fn test_check_cart() {
        let mut store = InMemoryCartStore::new();
        let shopper = mina();
        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(1)).unwrap();
        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(4)).unwrap();

        let check = check_cart(&store, Some(&shopper)).unwrap();
        assert!(check.logged_in);
        assert_eq!(check.cart_items.len(), 2);
        assert!(check.cart_items.contains(&ProductId::new(4)));

        let anonymous = check_cart(&store, None).unwrap();
        assert_eq!(anonymous, CartCheck::default());
        assert!(!anonymous.logged_in);
    }

    #[test]
    fn test_cart_records_fall_back_and_skip() {
        let shopper = mina();
        let mut store = InMemoryCartStore::new();
        let legacy = |product: i64| CartItem {
            id: crate::ids::CartItemId::new(0),
            user_id: UserId::new(1),
            username: "mina".to_string(),
            product_id: ProductId::new(product),
            brand: None,
            name: None,
            price: None,
            description: None,
            image_url: None,
            style: None,
            created_at: Utc::now(),
        };

        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(1)).unwrap();
        store.insert(legacy(3)).unwrap();
        store.insert(legacy(77)).unwrap();

        let resolution = cart_records(&store, &catalog(), Some(&shopper)).unwrap();
        let mut names: Vec<&str> = resolution.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();

        assert_eq!(names, vec!["Product 1", "Product 3"]);
        assert_eq!(resolution.skipped, vec![ProductId::new(77)]);
    }

    #[test]
    fn test_snapshot_survives_product_removal() {
        let shopper = mina();
        let mut store = InMemoryCartStore::new();
        add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(5)).unwrap();

        let resolution = cart_records(&store, &Catalog::default(), Some(&shopper)).unwrap();

        assert_eq!(resolution.records.len(), 1);
        assert_eq!(resolution.records[0].name, "Product 5");
        assert!(resolution.skipped.is_empty());
    }

    #[test]
    fn test_account_page_uses_account_preset() {
        let shopper = mina();
        let mut store = InMemoryCartStore::new();
        for id in 1..=5 {
            add_to_cart(&mut store, &catalog(), Some(&shopper), ProductId::new(id)).unwrap();
        }
        let resolution = cart_records(&store, &catalog(), Some(&shopper)).unwrap();

        let first = account_page(&resolution, &ListingPreset::ACCOUNT, 1);
        assert_eq!(first.len(), 3);
        assert_eq!(first.page_size, 3);
        assert_eq!(first.total_pages, 2);

        let second = account_page(&resolution, &ListingPreset::ACCOUNT, 2);
        assert_eq!(second.len(), 2);
        assert!(!second.has_next());

        assert_eq!(account_page(&resolution, &ListingPreset::ACCOUNT, 0).page_number, 1);
    }
}
