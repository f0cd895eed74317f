//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, send};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["ping"], "Hello Category Resource");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // MakeRequestUuid produces a hyphenated v4 UUID.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_configured_origin_and_exposes_location(pool: PgPool) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/categories")
        .header("origin", "http://localhost:8080")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(build_test_app(pool.clone()), request).await;
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:8080"
    );

    let request = Request::builder()
        .uri("/api/categories")
        .header("origin", "http://localhost:8080")
        .body(Body::empty())
        .unwrap();
    let response = send(build_test_app(pool), request).await;
    assert_eq!(response.headers()["access-control-expose-headers"], "location");
}
