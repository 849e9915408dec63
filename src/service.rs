//! ProductService - application-level operations over a repository.
//!
//! The service owns the business limits the repository deliberately does not
//! know about: the maximum batch lookup size and the size > 0 contract for
//! paged queries. It also turns the repository's absence outcome into a
//! distinct not-found error for callers that need one.

use tracing::{error, info};

use crate::error::CatalogError;
use crate::pagination::PageResult;
use crate::product::Product;
use crate::repository::ProductRepository;
use crate::search::ProductSearchQuery;

/// Default cap on the number of ids a single batch lookup may request.
pub const DEFAULT_BATCH_MAX_PRODUCTS: usize = 50;

/// Catalog operations with business limits applied.
///
/// Generic over the repository: hand it any `ProductRepository` and share
/// the whole service behind an `Arc`.
pub struct ProductService<R> {
    repository: R,
    batch_max_products: usize,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_batch_limit(repository, DEFAULT_BATCH_MAX_PRODUCTS)
    }

    pub fn with_batch_limit(repository: R, batch_max_products: usize) -> Self {
        ProductService {
            repository,
            batch_max_products,
        }
    }

    /// Maximum number of ids `find_by_ids` accepts.
    pub fn batch_max_products(&self) -> usize {
        self.batch_max_products
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Find one product, or fail with `ProductNotFound`.
    pub fn find_by_id(&self, id: u64) -> Result<Product, CatalogError> {
        info!(product_id = id, "finding product by id");
        match self.repository.find_by_id(id) {
            Some(product) => Ok(product),
            None => {
                error!(product_id = id, "product not found");
                Err(CatalogError::ProductNotFound(id))
            }
        }
    }

    /// Find a batch of products by id, enforcing the batch limits.
    ///
    /// Unknown ids are silently omitted from the result; an empty result is
    /// success. Only an empty or oversized request is an error.
    pub fn find_by_ids(&self, ids: &[u64]) -> Result<Vec<Product>, CatalogError> {
        info!(requested = ids.len(), "finding products by ids");

        if ids.is_empty() {
            return Err(CatalogError::EmptyBatch);
        }
        if ids.len() > self.batch_max_products {
            return Err(CatalogError::BatchLimitExceeded {
                limit: self.batch_max_products,
                requested: ids.len(),
            });
        }

        Ok(self.repository.find_by_ids(ids))
    }

    /// Run a paged search. `size == 0` is rejected with `InvalidParameter`
    /// before the repository is consulted.
    pub fn find_page(
        &self,
        query: &ProductSearchQuery,
    ) -> Result<PageResult<Product>, CatalogError> {
        if query.size == 0 {
            return Err(CatalogError::InvalidParameter(
                "size must be greater than zero".to_string(),
            ));
        }

        info!(page = query.page, size = query.size, "finding product page");
        Ok(self.repository.find_page(query))
    }
}
