//! catalog_search - filtered, sorted, paginated queries over an in-memory
//! product catalog.
//!
//! The core is a query engine: composable [`Specification`] predicates for
//! optional filters, a multi-key comparator builder with defined null
//! handling, and a pagination slicer. Around it sit a [`ProductService`]
//! that applies business limits and an optional axum HTTP transport
//! (feature `http`).
//!
//! The catalog is an immutable snapshot loaded once at startup; every query
//! is a pure read, so a single repository can serve any number of
//! concurrent callers without coordination.

mod error;
mod pagination;
mod product;
mod repository;
mod search;
mod service;
mod sorting;
mod specification;

pub use error::CatalogError;
pub use pagination::{page_bounds, PageResult};
pub use product::{ParseConditionError, Product, ProductCondition};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use search::{
    ParseSortError, ProductFilter, ProductSearchQuery, SortDirection, SortField, SortOrder,
};
pub use service::{ProductService, DEFAULT_BATCH_MAX_PRODUCTS};
pub use sorting::{compare, compare_chained, sort_products};
pub use specification::{
    And, AvailabilitySpecification, BrandSpecification, CategorySpecification,
    ConditionSpecification, FreeShippingSpecification, NameSpecification, Or,
    PriceRangeSpecification, RatingRangeSpecification, Specification,
    SpecificationsSpecification,
};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
pub mod http;
