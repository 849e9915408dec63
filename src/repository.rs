//! Product repository - the query engine over the catalog snapshot.
//!
//! The catalog is loaded once and held as a plain `Vec<Product>`. Every
//! operation is a pure read, so the repository needs no lock: share it
//! behind an `Arc` and query it from as many tasks as you like.

use std::io::Read;

use tracing::debug;

use crate::error::CatalogError;
use crate::pagination::{page_bounds, PageResult};
use crate::product::Product;
use crate::search::ProductSearchQuery;
use crate::sorting::compare_chained;
use crate::specification::Specification;

/// Read-only access to the product catalog.
pub trait ProductRepository {
    /// Find one product by exact id. Absence is an outcome, not an error.
    fn find_by_id(&self, id: u64) -> Option<Product>;

    /// Find every product whose id is in `ids`, in catalog order. Ids with
    /// no match are silently omitted.
    fn find_by_ids(&self, ids: &[u64]) -> Vec<Product>;

    /// Filter, sort, and slice the catalog into one page.
    fn find_page(&self, query: &ProductSearchQuery) -> PageResult<Product>;

    /// Total number of products in the catalog.
    fn count(&self) -> usize;
}

/// Catalog snapshot backed by an in-memory list, typically deserialized
/// from a bundled JSON file at startup.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryProductRepository { products }
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| CatalogError::CatalogLoad(e.to_string()))?;
        Ok(Self::new(products))
    }

    /// Load a catalog from a reader yielding a JSON array of products.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_reader(reader)
            .map_err(|e| CatalogError::CatalogLoad(e.to_string()))?;
        Ok(Self::new(products))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: u64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn find_by_ids(&self, ids: &[u64]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }

    fn find_page(&self, query: &ProductSearchQuery) -> PageResult<Product> {
        let specification = query.filter.to_specification();

        // Filter on borrowed products; only the page that survives slicing
        // gets cloned.
        let mut matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| specification.is_satisfied_by(p))
            .collect();

        if !query.sort_orders.is_empty() {
            matched.sort_by(|a, b| compare_chained(&query.sort_orders, a, b));
        }

        let total_items = matched.len();
        let (from, to) = page_bounds(query.page, query.size, total_items);
        let items: Vec<Product> = matched[from..to].iter().map(|p| (*p).clone()).collect();

        debug!(
            total_items,
            page = query.page,
            size = query.size,
            returned = items.len(),
            "catalog page query"
        );

        PageResult::new(items, query.page, query.size, total_items)
    }

    fn count(&self) -> usize {
        self.products.len()
    }
}
