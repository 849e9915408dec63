//! HTTP transport - maps catalog routes to service calls.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health` — health check returning `{ "ok": true, "products": N }`.
//! - `GET /v1/products/:id` — one product by id, 404 when absent.
//! - `GET /v1/products/batch?ids=1,2,3` — batch lookup, capped by the
//!   service's batch limit.
//! - `GET /v1/products?...` — filtered, sorted, paginated search.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_search::{http, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::from_json_str(include_str!("../../data/products.json"))?;
//! let service = Arc::new(ProductService::new(repository));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:3000").await?;
//! ```

mod params;
mod response;

pub use params::{build_sort_orders, BatchParams, SearchParams};
pub use response::{PageResponse, ProductDetailResponse, ProductSummaryResponse};

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::CatalogError;
use crate::repository::{InMemoryProductRepository, ProductRepository};
use crate::service::ProductService;

/// Build an axum `Router` serving the catalog routes over the given service.
pub fn router<R>(service: Arc<ProductService<R>>) -> Router
where
    R: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler::<R>))
        .route("/v1/products", get(search_handler::<R>))
        .route("/v1/products/batch", get(batch_handler::<R>))
        .route("/v1/products/:id", get(detail_handler::<R>))
        .with_state(service)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(
    service: Arc<ProductService<InMemoryProductRepository>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// `GET /health` — returns `{ "ok": true, "products": N }`.
async fn health_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
) -> impl IntoResponse
where
    R: ProductRepository + Send + Sync + 'static,
{
    Json(json!({ "ok": true, "products": service.repository().count() }))
}

/// `GET /v1/products/:id` — one product, or a 404 error body.
async fn detail_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: ProductRepository + Send + Sync + 'static,
{
    match service.find_by_id(id) {
        Ok(product) => Json(ProductDetailResponse::from(product)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// `GET /v1/products/batch?ids=1,2,3` — batch lookup.
async fn batch_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<BatchParams>,
) -> Response
where
    R: ProductRepository + Send + Sync + 'static,
{
    let result = params
        .parse_ids()
        .and_then(|ids| service.find_by_ids(&ids));
    match result {
        Ok(products) => {
            let body: Vec<ProductDetailResponse> =
                products.into_iter().map(Into::into).collect();
            Json(body).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `GET /v1/products` — paged search with filters and sort orders.
async fn search_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    R: ProductRepository + Send + Sync + 'static,
{
    let result = params
        .into_query()
        .and_then(|query| service.find_page(&query));
    match result {
        Ok(page) => {
            let body: PageResponse<ProductSummaryResponse> = PageResponse::from_page(page);
            Json(body).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Shape a `CatalogError` as `{ "error": ... }` with its mapped status.
fn error_response(error: &CatalogError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
