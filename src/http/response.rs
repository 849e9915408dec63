//! Transport-facing response shapes.
//!
//! The engine hands back `Product` values; these types decide what the wire
//! sees. Point and batch lookups return the full detail shape (with the
//! product name exposed as `title`), paged search returns the lighter
//! summary shape plus page metadata.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::pagination::PageResult;
use crate::product::{Product, ProductCondition};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub brand: Option<String>,
    pub image_url: String,
    pub category: String,
    pub specifications: HashMap<String, String>,
    pub condition: ProductCondition,
    pub rating: Option<f64>,
    pub total_reviews: u32,
    pub has_free_shipping: bool,
    pub is_available: bool,
}

impl From<Product> for ProductDetailResponse {
    fn from(product: Product) -> Self {
        ProductDetailResponse {
            id: product.id,
            title: product.name,
            description: product.description,
            price: product.price,
            brand: product.brand,
            image_url: product.image_url,
            category: product.category,
            specifications: product.specifications,
            condition: product.condition,
            rating: product.rating,
            total_reviews: product.total_reviews,
            has_free_shipping: product.has_free_shipping,
            is_available: product.is_available,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
    pub condition: ProductCondition,
    pub rating: Option<f64>,
    pub total_reviews: u32,
    pub has_free_shipping: bool,
    pub is_available: bool,
}

impl From<Product> for ProductSummaryResponse {
    fn from(product: Product) -> Self {
        ProductSummaryResponse {
            id: product.id,
            title: product.name,
            price: product.price,
            image_url: product.image_url,
            condition: product.condition,
            rating: product.rating,
            total_reviews: product.total_reviews,
            has_free_shipping: product.has_free_shipping,
            is_available: product.is_available,
        }
    }
}

/// One page of results with the navigation metadata spelled out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> PageResponse<T> {
    pub fn from_page<U: Into<T>>(page: PageResult<U>) -> Self {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        PageResponse {
            items: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_items: page.total_items,
            total_pages,
            first,
            last,
        }
    }
}
