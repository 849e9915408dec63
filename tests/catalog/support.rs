//! Shared fixtures: a product builder with sensible defaults and a small
//! catalog with known brands, ratings, and prices.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use catalog_search::{Product, ProductCondition};

pub fn product(id: u64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: dec!(100.00),
        brand: Some("Test Brand".to_string()),
        image_url: format!("{}.jpg", id),
        category: "Test Category".to_string(),
        specifications: HashMap::new(),
        condition: ProductCondition::New,
        rating: Some(4.0),
        total_reviews: 0,
        has_free_shipping: false,
        is_available: true,
    }
}

pub fn with_price(mut p: Product, price: Decimal) -> Product {
    p.price = price;
    p
}

pub fn with_brand(mut p: Product, brand: Option<&str>) -> Product {
    p.brand = brand.map(str::to_string);
    p
}

pub fn with_rating(mut p: Product, rating: Option<f64>) -> Product {
    p.rating = rating;
    p
}

/// Six products covering the interesting sort/filter cases: a missing
/// brand, a missing rating, duplicate prices, mixed availability.
pub fn catalog() -> Vec<Product> {
    let mut items = vec![
        with_rating(
            with_brand(with_price(product(1, "Alpha Phone"), dec!(300.00)), Some("Nokia")),
            Some(4.5),
        ),
        with_rating(
            with_brand(with_price(product(2, "beta case"), dec!(15.00)), None),
            None,
        ),
        with_rating(
            with_brand(with_price(product(3, "Gamma Tablet"), dec!(300.00)), Some("apple")),
            Some(3.2),
        ),
        with_rating(
            with_brand(with_price(product(4, "delta charger"), dec!(25.00)), Some("Anker")),
            Some(4.9),
        ),
        with_rating(
            with_brand(with_price(product(5, "Epsilon Watch"), dec!(120.00)), Some("Garmin")),
            Some(4.5),
        ),
        with_rating(
            with_brand(with_price(product(6, "zeta stand"), dec!(25.00)), None),
            Some(2.0),
        ),
    ];

    items[5].is_available = false;
    items[0].has_free_shipping = true;
    items[4].has_free_shipping = true;
    items
}
