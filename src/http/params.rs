//! Query-string parameter binding for the catalog routes.
//!
//! Everything arriving here is untyped text; this module owns the parsing
//! into typed filter/sort values and the decision that an invalid token is a
//! 400, so the engine itself only ever sees well-formed queries.
//!
//! `sortBy` and `direction` are comma-separated lists aligned by position
//! (`sortBy=price,rating&direction=desc` sorts by price descending, then
//! rating ascending). Missing direction positions default to ascending so a
//! fields-only request still has a predictable contract.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::search::{ProductFilter, ProductSearchQuery, SortOrder};

const DEFAULT_PAGE_SIZE: usize = 10;

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Raw query parameters of `GET /v1/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub has_free_shipping: Option<bool>,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

impl SearchParams {
    /// Turn the raw parameters into a typed query, or fail with a 400-style
    /// error on the first invalid token.
    pub fn into_query(self) -> Result<ProductSearchQuery, CatalogError> {
        let condition = match self.condition.as_deref() {
            None => None,
            Some(token) => Some(
                token
                    .parse()
                    .map_err(|e: crate::product::ParseConditionError| {
                        CatalogError::InvalidParameter(e.to_string())
                    })?,
            ),
        };

        let sort_orders = build_sort_orders(self.sort_by.as_deref(), self.direction.as_deref())?;

        Ok(ProductSearchQuery {
            filter: ProductFilter {
                name: self.name,
                category: self.category,
                brand: self.brand,
                condition,
                specifications: Default::default(),
                min_price: self.min_price,
                max_price: self.max_price,
                min_rating: self.min_rating,
                max_rating: self.max_rating,
                has_free_shipping: self.has_free_shipping,
                is_available: self.is_available,
            },
            sort_orders,
            page: self.page,
            size: self.size,
        })
    }
}

/// Raw query parameters of `GET /v1/products/batch`.
#[derive(Debug, Default, Deserialize)]
pub struct BatchParams {
    #[serde(default)]
    pub ids: String,
}

impl BatchParams {
    /// Parse the comma-separated id list. An empty parameter yields an empty
    /// list; the service decides that an empty batch is an error.
    pub fn parse_ids(&self) -> Result<Vec<u64>, CatalogError> {
        self.ids
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u64>().map_err(|_| {
                    CatalogError::InvalidParameter(format!("id={} is invalid", token))
                })
            })
            .collect()
    }
}

/// Align each requested sort field with its direction by position. Missing
/// directions default to ascending; extra directions are ignored.
pub fn build_sort_orders(
    sort_by: Option<&str>,
    direction: Option<&str>,
) -> Result<Vec<SortOrder>, CatalogError> {
    let fields: Vec<&str> = match sort_by {
        None => return Ok(Vec::new()),
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect(),
    };

    let directions: Vec<&str> = direction
        .map(|raw| raw.split(',').map(str::trim).collect())
        .unwrap_or_default();

    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let field = field
                .parse()
                .map_err(|e: crate::search::ParseSortError| {
                    CatalogError::InvalidParameter(e.to_string())
                })?;
            let direction = match directions.get(index).filter(|token| !token.is_empty()) {
                None => crate::search::SortDirection::Asc,
                Some(token) => token.parse().map_err(|e: crate::search::ParseSortError| {
                    CatalogError::InvalidParameter(e.to_string())
                })?,
            };
            Ok(SortOrder { field, direction })
        })
        .collect()
}
