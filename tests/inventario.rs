//! End-to-end checks against a real PostgreSQL database.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL`, so
//! these are ignored by default. Run with `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use joyas_api::routes::{router, AppState};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

async fn get(pool: &PgPool, uri: &str) -> (StatusCode, Value) {
    let app = router(AppState::new(pool.clone()));
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_default_listing(pool: PgPool) {
    let (status, body) = get(&pool, "/joyas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], json!(1));
    assert_eq!(body["limits"], json!(10));
    assert_eq!(body["total"], json!(6));
    assert_eq!(ids(&body["data"]), vec![1, 2, 3, 4, 5, 6]);
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_listing_pages(pool: PgPool) {
    let (status, body) = get(&pool, "/joyas?limits=2&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"]), vec![3, 4]);
    assert_eq!(body["total"], json!(6));

    let (_, body) = get(&pool, "/joyas?limits=4&page=2").await;
    assert_eq!(ids(&body["data"]), vec![5, 6]);

    let (status, body) = get(&pool, "/joyas?limits=4&page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_listing_order(pool: PgPool) {
    let (_, body) = get(&pool, "/joyas?order_by=precio_DESC&limits=3").await;
    assert_eq!(ids(&body["data"]), vec![6, 5, 4]);

    // ties on stock fall back to id order
    let (_, body) = get(&pool, "/joyas?order_by=stock_ASC").await;
    assert_eq!(ids(&body["data"]), vec![1, 6, 4, 5, 2, 3]);
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_listing_self_links(pool: PgPool) {
    let (_, body) = get(&pool, "/joyas").await;

    for row in body["data"].as_array().unwrap() {
        let id = row["id"].as_i64().unwrap();
        assert_eq!(row["links"]["self"], json!(format!("/joyas/{}", id)));
        assert!(row.get("nombre").is_some());
    }
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_filter_by_price_range(pool: PgPool) {
    let (status, body) = get(&pool, "/joyas/filtros?precio_min=12000&precio_max=25000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    for row in body.as_array().unwrap() {
        let precio = row["precio"].as_i64().unwrap();
        assert!((12000..=25000).contains(&precio));
        assert!(row.get("links").is_none());
    }
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_filter_by_categoria_only(pool: PgPool) {
    let (_, body) = get(&pool, "/joyas/filtros?categoria=aros").await;

    assert_eq!(ids(&body), vec![3, 4, 5]);
    let metals: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["metal"].as_str().unwrap())
        .collect();
    assert!(metals.contains(&"oro") && metals.contains(&"plata"));
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_filter_combined(pool: PgPool) {
    let (_, body) = get(&pool, "/joyas/filtros?precio_max=30000&categoria=aros&metal=plata").await;
    assert_eq!(ids(&body), vec![5]);
}

#[sqlx::test(fixtures("inventario"))]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_filter_without_matches(pool: PgPool) {
    let (status, body) = get(&pool, "/joyas/filtros?precio_min=100&precio_max=200").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
