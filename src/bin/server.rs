//! catalog-server - serves the bundled product catalog over HTTP.
//!
//! Configuration comes from the environment:
//! - `CATALOG_ADDR` — listen address (default `0.0.0.0:3000`)
//! - `CATALOG_DATA` — path to the catalog JSON file (default `data/products.json`)
//! - `CATALOG_BATCH_MAX` — batch lookup id limit (default 50)
//! - `RUST_LOG` — tracing filter (default `info`)

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_search::{http, InMemoryProductRepository, ProductService, DEFAULT_BATCH_MAX_PRODUCTS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("CATALOG_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let data_path =
        std::env::var("CATALOG_DATA").unwrap_or_else(|_| "data/products.json".to_string());
    let batch_max = match std::env::var("CATALOG_BATCH_MAX") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_BATCH_MAX_PRODUCTS,
    };

    let file = File::open(&data_path)?;
    let repository = InMemoryProductRepository::from_json_reader(BufReader::new(file))?;
    info!(products = repository.len(), path = %data_path, "catalog loaded");

    let service = Arc::new(ProductService::with_batch_limit(repository, batch_max));

    info!(%addr, "catalog server listening");
    http::serve(service, &addr).await?;

    Ok(())
}
