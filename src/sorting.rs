//! Comparator building for multi-key product sorting.
//!
//! Each sort field defines one ascending base order; descending is always
//! the exact reverse of that order, never an independent rule. This is why
//! products with an absent rating or brand move from the front of an
//! ascending sort to the back of a descending one instead of being pinned
//! to one end.

use std::cmp::Ordering;

use crate::product::Product;
use crate::search::{SortDirection, SortField, SortOrder};

/// Compare two products on one field, ascending.
///
/// NAME and BRAND compare case-insensitively; a missing brand sorts before
/// every present brand (`Option` ordering). A missing rating compares as
/// negative infinity, below every real rating.
fn compare_ascending(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Rating => {
            let left = a.rating.unwrap_or(f64::NEG_INFINITY);
            let right = b.rating.unwrap_or(f64::NEG_INFINITY);
            left.total_cmp(&right)
        }
        SortField::Brand => {
            let left = a.brand.as_ref().map(|brand| brand.to_lowercase());
            let right = b.brand.as_ref().map(|brand| brand.to_lowercase());
            left.cmp(&right)
        }
    }
}

/// Compare two products under a single sort order.
pub fn compare(order: SortOrder, a: &Product, b: &Product) -> Ordering {
    let ordering = compare_ascending(order.field, a, b);
    match order.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Compare two products under a chained ordering: the first order is the
/// primary key, each later order only decides ties left by the ones before.
pub fn compare_chained(orders: &[SortOrder], a: &Product, b: &Product) -> Ordering {
    orders
        .iter()
        .map(|order| compare(*order, a, b))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Sort products in place by the given orders. An empty order list leaves
/// the slice in its original (catalog) order.
pub fn sort_products(products: &mut [Product], orders: &[SortOrder]) {
    if orders.is_empty() {
        return;
    }
    products.sort_by(|a, b| compare_chained(orders, a, b));
}
