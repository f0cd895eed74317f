//! Integration tests for the server-rendered listing page at `/`.

mod common;

use axum::http::StatusCode;
use categories_db::seed::seed_initial_categories;
use common::{body_json, body_text, build_test_app, create_category, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn index_renders_every_category(pool: PgPool) {
    let vehicles = create_category(&pool, "Vehicles", Some("Cars")).await;
    create_category(&pool, "Electronics", None).await;

    let response = get(build_test_app(pool), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<title>Categories List</title>"));
    assert!(html.contains(&format!("<td>{vehicles}</td>")));
    assert!(html.contains("<td>Vehicles</td>"));
    assert!(html.contains("<td>Electronics</td>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_applies_name_filter(pool: PgPool) {
    create_category(&pool, "Vehicles", None).await;
    create_category(&pool, "Electronics", None).await;

    let response = get(build_test_app(pool), "/?name_filter=vehicles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<td>Vehicles</td>"));
    assert!(!html.contains("<td>Electronics</td>"));
    assert!(html.contains(r#"value="vehicles""#));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_rejects_repeated_filter_with_json_error(pool: PgPool) {
    let response = get(build_test_app(pool), "/?name_filter=a&name_filter=b").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_lists_seeded_catalogue(pool: PgPool) {
    seed_initial_categories(&pool).await.unwrap();

    let html = body_text(get(build_test_app(pool.clone()), "/").await).await;
    // One header row plus one row per category.
    assert_eq!(html.matches("<tr>").count(), 17);

    let html = body_text(get(build_test_app(pool), "/?name_filter=Veh").await).await;
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>Vehicles</td>"));
}
