//! Product - the immutable catalog record.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Physical condition of a listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
    OpenBox,
}

/// Parse failure for a condition token (case-insensitive match against the
/// serialized names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConditionError(pub String);

impl fmt::Display for ParseConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "condition={} is invalid", self.0)
    }
}

impl std::error::Error for ParseConditionError {}

impl FromStr for ProductCondition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NEW" => Ok(ProductCondition::New),
            "USED" => Ok(ProductCondition::Used),
            "REFURBISHED" => Ok(ProductCondition::Refurbished),
            "OPEN_BOX" => Ok(ProductCondition::OpenBox),
            _ => Err(ParseConditionError(s.to_string())),
        }
    }
}

/// A single catalog record.
///
/// Loaded once at startup and never mutated; queries share the catalog
/// read-only, so `Product` carries no interior mutability. Wire names are
/// camelCase to match the bundled JSON dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub brand: Option<String>,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub specifications: HashMap<String, String>,
    pub condition: ProductCondition,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub has_free_shipping: bool,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}
