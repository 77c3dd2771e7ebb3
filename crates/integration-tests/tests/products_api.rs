//! Integration tests for the catalog side of the API: product listing,
//! detail, categories, featured, reviews, and the admin reads.

use axum::http::{Method, StatusCode};
use serde_json::json;

use ss_stores_integration_tests::{app, send};

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn listing_defaults_to_twelve_per_page() {
    let (status, body) = send(app(), Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["products"].as_array().unwrap().len(), 12);
    assert_eq!(body["totalProducts"], 70);
    assert_eq!(body["totalPages"], 6);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["hasNextPage"], true);
    assert_eq!(body["hasPrevPage"], false);
}

#[tokio::test]
async fn listing_pagination_reaches_the_last_page() {
    let (status, body) =
        send(app(), Method::GET, "/api/products?page=6&limit=12", None).await;
    assert_eq!(status, StatusCode::OK);

    // 70 products, 5 full pages of 12 plus 10 on the last
    assert_eq!(body["products"].as_array().unwrap().len(), 10);
    assert_eq!(body["currentPage"], 6);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["hasPrevPage"], true);
}

#[tokio::test]
async fn listing_filters_by_category() {
    let (status, body) = send(
        app(),
        Method::GET,
        "/api/products?category=fitness&limit=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    for p in products {
        assert_eq!(p["category"], "fitness");
        assert_eq!(p["categoryName"], "Fitness");
    }
}

#[tokio::test]
async fn listing_unknown_category_is_empty_not_an_error() {
    let (status, body) =
        send(app(), Method::GET, "/api/products?category=nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProducts"], 0);
    assert_eq!(body["products"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_sorts_by_price_ascending() {
    let (status, body) = send(
        app(),
        Method::GET,
        "/api/products?sort=price-low&limit=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let prices: Vec<f64> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn listing_ignores_unparseable_filters() {
    // parseInt/parseFloat tolerance of the original API: garbage falls back
    // to defaults instead of failing the request
    let (status, body) = send(
        app(),
        Method::GET,
        "/api/products?minPrice=abc&page=xyz&limit=&sort=alphabetical",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalProducts"], 70);
}

#[tokio::test]
async fn product_detail_includes_related_products() {
    let (status, body) = send(app(), Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["id"], 1);
    assert!(body["title"].as_str().unwrap().len() > 1);

    let related = body["relatedProducts"].as_array().unwrap();
    assert!(related.len() <= 4);
    for r in related {
        assert_eq!(r["category"], body["category"]);
        assert_ne!(r["id"], body["id"]);
    }
}

#[tokio::test]
async fn product_detail_unknown_id_is_404() {
    let (status, body) = send(app(), Method::GET, "/api/products/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, _) = send(app(), Method::GET, "/api/products/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn featured_listing_is_capped_at_eight() {
    let (status, body) = send(app(), Method::GET, "/api/products/featured", None).await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert!(products.len() <= 8);
    for p in products {
        assert_eq!(p["featured"], true);
    }
}

#[tokio::test]
async fn categories_are_distinct_with_display_names() {
    let (status, body) = send(app(), Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);

    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 7);
    assert_eq!(categories[0], json!({ "key": "menswear", "name": "Menswear" }));
}

#[tokio::test]
async fn reviews_roundtrip_per_product() {
    let app = app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/products/3/reviews",
        Some(json!({ "rating": 5, "comment": "Fits great", "customerName": "Dana" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review added successfully");
    assert_eq!(body["review"]["productId"], 3);
    assert_eq!(body["review"]["rating"], 5);

    let (status, body) =
        send(app.clone(), Method::GET, "/api/products/3/reviews", None).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comment"], "Fits great");
    assert_eq!(reviews[0]["customerName"], "Dana");

    // a different product has no reviews
    let (status, body) = send(app, Method::GET, "/api/products/4/reviews", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn review_for_unknown_product_is_404() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/products/99999/reviews",
        Some(json!({ "rating": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn review_without_rating_is_400() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/products/1/reviews",
        Some(json!({ "comment": "no stars given" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating is required");
}

#[tokio::test]
async fn admin_reads_expose_catalog_and_orders() {
    let app = app();

    let (status, body) = send(app.clone(), Method::GET, "/api/admin/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 70);

    let (status, body) = send(app, Method::GET, "/api/admin/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}
