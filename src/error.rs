//! Error types for catalog operations.

use std::error::Error;
use std::fmt;

/// Error type for catalog service operations.
///
/// Normal "nothing matched" outcomes (empty pages, unknown batch ids) are
/// success values, not errors; this enum covers the distinct not-found
/// outcome of a point lookup plus boundary-enforced business limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Point lookup found no product with this id.
    ProductNotFound(u64),
    /// Batch lookup called with no ids at all.
    EmptyBatch,
    /// Batch lookup asked for more ids than the configured limit.
    BatchLimitExceeded { limit: usize, requested: usize },
    /// A request parameter failed validation (bad enum token, zero size, ...).
    InvalidParameter(String),
    /// The catalog data source could not be read or parsed.
    CatalogLoad(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ProductNotFound(id) => {
                write!(f, "product with id={} not found", id)
            }
            CatalogError::EmptyBatch => write!(f, "at least one product id required"),
            CatalogError::BatchLimitExceeded { limit, requested } => write!(
                f,
                "cannot return more than {} products, requested: {}",
                limit, requested
            ),
            CatalogError::InvalidParameter(message) => write!(f, "{}", message),
            CatalogError::CatalogLoad(message) => {
                write!(f, "failed to load catalog: {}", message)
            }
        }
    }
}

impl Error for CatalogError {}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::ProductNotFound(_) => 404,
            CatalogError::EmptyBatch => 400,
            CatalogError::BatchLimitExceeded { .. } => 400,
            CatalogError::InvalidParameter(_) => 400,
            CatalogError::CatalogLoad(_) => 500,
        }
    }
}
