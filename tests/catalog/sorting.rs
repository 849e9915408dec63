//! Sort semantics through the engine, including the null-handling subtlety:
//! descending is the exact reverse of ascending, so unrated/unbranded
//! products flip ends with the direction.

use catalog_search::{
    InMemoryProductRepository, ProductFilter, ProductRepository, ProductSearchQuery, SortField,
    SortOrder,
};

use crate::support;

fn sorted_ids(orders: Vec<SortOrder>) -> Vec<u64> {
    let repo = InMemoryProductRepository::new(support::catalog());
    let page = repo.find_page(&ProductSearchQuery {
        filter: ProductFilter::default(),
        sort_orders: orders,
        page: 0,
        size: 100,
    });
    page.items.iter().map(|p| p.id).collect()
}

#[test]
fn name_sort_ignores_case() {
    // Alpha, beta, delta, Epsilon, Gamma, zeta
    assert_eq!(sorted_ids(vec![SortOrder::asc(SortField::Name)]), vec![1, 2, 4, 5, 3, 6]);
}

#[test]
fn rating_ascending_puts_unrated_first() {
    let ids = sorted_ids(vec![SortOrder::asc(SortField::Rating)]);
    assert_eq!(ids[0], 2);
    // 2.0, 3.2, then the 4.5 tie, then 4.9
    assert_eq!(&ids[1..3], &[6, 3]);
    assert_eq!(ids[5], 4);
}

#[test]
fn rating_descending_puts_unrated_last() {
    let ids = sorted_ids(vec![SortOrder::desc(SortField::Rating)]);
    assert_eq!(ids[0], 4);
    assert_eq!(ids[5], 2);
}

#[test]
fn brand_ascending_puts_unbranded_first() {
    let ids = sorted_ids(vec![SortOrder::asc(SortField::Brand)]);
    // Two unbranded products lead, in catalog order (stable sort).
    assert_eq!(&ids[0..2], &[2, 6]);
    // anker, apple, garmin, nokia
    assert_eq!(&ids[2..], &[4, 3, 5, 1]);
}

#[test]
fn brand_descending_puts_unbranded_last() {
    let ids = sorted_ids(vec![SortOrder::desc(SortField::Brand)]);
    assert_eq!(&ids[0..4], &[1, 5, 3, 4]);
    // The unbranded pair stays in catalog order: the sort is stable and
    // reversing the comparator does not reverse equal elements.
    assert_eq!(&ids[4..], &[2, 6]);
}

#[test]
fn chained_sort_uses_later_keys_only_for_ties() {
    // Prices: 15 | 25, 25 | 120 | 300, 300. Rating desc breaks the ties:
    // within 25s, 4.9 before 2.0; within 300s, 4.5 before 3.2.
    let ids = sorted_ids(vec![
        SortOrder::asc(SortField::Price),
        SortOrder::desc(SortField::Rating),
    ]);
    assert_eq!(ids, vec![2, 4, 6, 5, 1, 3]);
}

#[test]
fn no_sort_orders_keeps_catalog_order() {
    assert_eq!(sorted_ids(vec![]), vec![1, 2, 3, 4, 5, 6]);
}
