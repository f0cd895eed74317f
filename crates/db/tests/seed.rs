//! Integration tests for the starter catalogue.

use categories_db::models::category::CreateCategory;
use categories_db::repositories::CategoryRepo;
use categories_db::seed::{seed_initial_categories, INITIAL_CATEGORIES};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_fills_empty_table(pool: PgPool) {
    let created = seed_initial_categories(&pool).await.unwrap();
    assert_eq!(created.len(), 16);
    assert_eq!(CategoryRepo::count(&pool).await.unwrap(), 16);

    let vehicles = CategoryRepo::list_where_name_like(&pool, "Veh")
        .await
        .unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].name, "Vehicles");
    assert_eq!(vehicles[0].description.as_deref(), Some("Vehicles"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_skipped_when_rows_exist(pool: PgPool) {
    let input = CreateCategory {
        name: Some("Stationery".to_string()),
        description: None,
    };
    CategoryRepo::create(&pool, &input).await.unwrap();

    let created = seed_initial_categories(&pool).await.unwrap();
    assert!(created.is_empty());
    assert_eq!(CategoryRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_twice_inserts_once(pool: PgPool) {
    seed_initial_categories(&pool).await.unwrap();
    seed_initial_categories(&pool).await.unwrap();

    let count = CategoryRepo::count(&pool).await.unwrap();
    assert_eq!(count, INITIAL_CATEGORIES.len() as i64);
}
