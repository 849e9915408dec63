//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use catalog_search::http;
use catalog_search::{InMemoryProductRepository, ProductService};

use crate::support;

fn test_service() -> Arc<ProductService<InMemoryProductRepository>> {
    Arc::new(ProductService::with_batch_limit(
        InMemoryProductRepository::new(support::catalog()),
        3,
    ))
}

/// Bind to port 0 and return the actual address.
async fn start_server(service: Arc<ProductService<InMemoryProductRepository>>) -> String {
    let app = http::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check_reports_catalog_size() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["products"], 6);
}

#[tokio::test]
async fn detail_route_returns_the_product_with_title() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Alpha Phone");
    assert_eq!(body["brand"], "Nokia");
}

#[tokio::test]
async fn unknown_id_returns_404_with_error_body() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products/404"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "product with id=404 not found");
}

#[tokio::test]
async fn batch_route_returns_requested_products() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products/batch?ids=3,1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn batch_route_enforces_limits() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    // Over the limit of 3.
    let resp = client
        .get(format!("{base}/v1/products/batch?ids=1,2,3,4"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Empty list.
    let resp = client
        .get(format!("{base}/v1/products/batch?ids="))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn search_route_filters_sorts_and_pages() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!(
            "{base}/v1/products?isAvailable=true&sortBy=price&direction=desc&page=0&size=2"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let ids: Vec<u64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    // Available products by price descending: 300, 300, 120, 25, 15.
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(body["totalItems"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["first"], true);
    assert_eq!(body["last"], false);
}

#[tokio::test]
async fn search_route_rejects_invalid_tokens() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products?condition=mint"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "condition=mint is invalid");

    let resp = client
        .get(format!("{base}/v1/products?sortBy=popularity"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn search_route_rejects_zero_size() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products?size=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn search_route_defaults_to_first_page_of_ten() {
    let base = start_server(test_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/products"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 10);
    assert_eq!(body["items"].as_array().unwrap().len(), 6);
}
