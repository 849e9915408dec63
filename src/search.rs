//! Search query values: filter, sort orders, and the paged query itself.
//!
//! Every filter dimension is optional; an absent field places no constraint
//! on that dimension. The query carries already-typed enums - parsing raw
//! tokens (and deciding what an invalid token means) belongs to the boundary
//! layer, which uses the `FromStr` impls here.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::ProductCondition;

/// Optional constraints over the catalog. All-absent matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub condition: Option<ProductCondition>,
    /// Required specification key -> expected value substring.
    pub specifications: HashMap<String, String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub has_free_shipping: Option<bool>,
    pub is_available: Option<bool>,
}

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Price,
    Rating,
    Brand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One (field, direction) sort instruction. A list of these forms a
/// lexicographic ordering: the first entry is the primary key, each later
/// entry only breaks ties left by the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortOrder { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        SortOrder::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        SortOrder::new(field, SortDirection::Desc)
    }
}

/// A complete paged search request against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearchQuery {
    pub filter: ProductFilter,
    pub sort_orders: Vec<SortOrder>,
    /// Zero-based page index.
    pub page: usize,
    /// Page size; callers must pass a size greater than zero.
    pub size: usize,
}

/// Parse failure for a sort field or direction token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSortError {
    Field(String),
    Direction(String),
}

impl fmt::Display for ParseSortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSortError::Field(token) => write!(f, "sort field={} is invalid", token),
            ParseSortError::Direction(token) => {
                write!(f, "sort direction={} is invalid", token)
            }
        }
    }
}

impl std::error::Error for ParseSortError {}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "rating" => Ok(SortField::Rating),
            "brand" => Ok(SortField::Brand),
            _ => Err(ParseSortError::Field(s.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParseSortError::Direction(s.to_string())),
        }
    }
}
