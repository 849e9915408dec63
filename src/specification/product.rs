//! Leaf specifications - one predicate per filter dimension.
//!
//! Every leaf treats an absent filter value as "always satisfied", so a
//! filter with no constraints composes into a specification that matches the
//! whole catalog. String dimensions match on a trimmed, case-insensitive
//! substring; a product field that is itself absent (brand only) never
//! contains anything, not even the empty string.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::Specification;
use crate::product::{Product, ProductCondition};
use crate::search::ProductFilter;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Substring match on the product name.
#[derive(Debug, Clone)]
pub struct NameSpecification {
    name: Option<String>,
}

impl NameSpecification {
    pub fn new(name: Option<String>) -> Self {
        NameSpecification { name }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match &self.name {
            None => true,
            Some(name) => contains_ignore_case(&item.name, name.trim()),
        }
    }
}

/// Substring match on the product category.
#[derive(Debug, Clone)]
pub struct CategorySpecification {
    category: Option<String>,
}

impl CategorySpecification {
    pub fn new(category: Option<String>) -> Self {
        CategorySpecification { category }
    }
}

impl Specification<Product> for CategorySpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match &self.category {
            None => true,
            Some(category) => contains_ignore_case(&item.category, category.trim()),
        }
    }
}

/// Substring match on the product brand. A product without a brand fails any
/// present brand filter, including the trimmed-empty one.
#[derive(Debug, Clone)]
pub struct BrandSpecification {
    brand: Option<String>,
}

impl BrandSpecification {
    pub fn new(brand: Option<String>) -> Self {
        BrandSpecification { brand }
    }
}

impl Specification<Product> for BrandSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match &self.brand {
            None => true,
            Some(brand) => item
                .brand
                .as_deref()
                .is_some_and(|product_brand| contains_ignore_case(product_brand, brand.trim())),
        }
    }
}

/// Exact match on the product condition.
#[derive(Debug, Clone)]
pub struct ConditionSpecification {
    condition: Option<ProductCondition>,
}

impl ConditionSpecification {
    pub fn new(condition: Option<ProductCondition>) -> Self {
        ConditionSpecification { condition }
    }
}

impl Specification<Product> for ConditionSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match self.condition {
            None => true,
            Some(condition) => item.condition == condition,
        }
    }
}

/// Required technical specifications: every filter key must exist on the
/// product, and the product's value must contain the expected value as a
/// case-insensitive substring. An empty requirement map matches everything.
#[derive(Debug, Clone)]
pub struct SpecificationsSpecification {
    required: HashMap<String, String>,
}

impl SpecificationsSpecification {
    pub fn new(required: HashMap<String, String>) -> Self {
        SpecificationsSpecification { required }
    }
}

impl Specification<Product> for SpecificationsSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        self.required.iter().all(|(key, expected)| {
            item.specifications
                .get(key)
                .is_some_and(|value| contains_ignore_case(value, expected))
        })
    }
}

/// Inclusive price bounds; each absent bound is a no-op.
#[derive(Debug, Clone)]
pub struct PriceRangeSpecification {
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl PriceRangeSpecification {
    pub fn new(min_price: Option<Decimal>, max_price: Option<Decimal>) -> Self {
        PriceRangeSpecification {
            min_price,
            max_price,
        }
    }
}

impl Specification<Product> for PriceRangeSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        self.min_price.map_or(true, |min| item.price >= min)
            && self.max_price.map_or(true, |max| item.price <= max)
    }
}

/// Inclusive rating bounds. An unrated product compares as 0.0.
#[derive(Debug, Clone)]
pub struct RatingRangeSpecification {
    min_rating: Option<f64>,
    max_rating: Option<f64>,
}

impl RatingRangeSpecification {
    pub fn new(min_rating: Option<f64>, max_rating: Option<f64>) -> Self {
        RatingRangeSpecification {
            min_rating,
            max_rating,
        }
    }
}

impl Specification<Product> for RatingRangeSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        let rating = item.rating.unwrap_or(0.0);
        self.min_rating.map_or(true, |min| rating >= min)
            && self.max_rating.map_or(true, |max| rating <= max)
    }
}

/// Exact match on the free-shipping flag.
#[derive(Debug, Clone)]
pub struct FreeShippingSpecification {
    free_shipping: Option<bool>,
}

impl FreeShippingSpecification {
    pub fn new(free_shipping: Option<bool>) -> Self {
        FreeShippingSpecification { free_shipping }
    }
}

impl Specification<Product> for FreeShippingSpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match self.free_shipping {
            None => true,
            Some(free_shipping) => item.has_free_shipping == free_shipping,
        }
    }
}

/// Exact match on the availability flag.
#[derive(Debug, Clone)]
pub struct AvailabilitySpecification {
    is_available: Option<bool>,
}

impl AvailabilitySpecification {
    pub fn new(is_available: Option<bool>) -> Self {
        AvailabilitySpecification { is_available }
    }
}

impl Specification<Product> for AvailabilitySpecification {
    fn is_satisfied_by(&self, item: &Product) -> bool {
        match self.is_available {
            None => true,
            Some(is_available) => item.is_available == is_available,
        }
    }
}

impl ProductFilter {
    /// Build one composite specification by AND-chaining every leaf filter.
    ///
    /// Each leaf handles its own absent value, so missing filters act as
    /// no-ops and the chain stays readable.
    pub fn to_specification(&self) -> impl Specification<Product> {
        NameSpecification::new(self.name.clone())
            .and(CategorySpecification::new(self.category.clone()))
            .and(BrandSpecification::new(self.brand.clone()))
            .and(ConditionSpecification::new(self.condition))
            .and(SpecificationsSpecification::new(self.specifications.clone()))
            .and(PriceRangeSpecification::new(self.min_price, self.max_price))
            .and(RatingRangeSpecification::new(
                self.min_rating,
                self.max_rating,
            ))
            .and(FreeShippingSpecification::new(self.has_free_shipping))
            .and(AvailabilitySpecification::new(self.is_available))
    }
}
