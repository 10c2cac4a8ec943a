//! Integration tests for MySqlProductDao.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use emporium_core::{EmporiumError, Product, ProductId};
use emporium_repository::{MySqlProductDao, ProductDao};

fn create_test_product(upc: &str, category: i32) -> Product {
    Product::new(
        format!("product-{}", upc),
        "integration test product".to_string(),
        category,
        upc.to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let created = dao
        .create(&create_test_product("012345678905", 3))
        .await
        .expect("Failed to create product");

    let id = created.id.expect("Generated key not set");
    assert!(id.into_inner() > 0);

    let found = dao
        .find_by_id(id)
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert_eq!(found.name, "product-012345678905");
    assert_eq!(found.description, "integration test product");
    assert_eq!(found.category, 3);
    assert_eq!(found.upc, "012345678905");
}

#[tokio::test]
async fn test_create_rejects_preassigned_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let mut product = create_test_product("012345678905", 3);
    product.id = Some(ProductId::from_i64(99));

    let err = dao.create(&product).await.unwrap_err();
    assert!(matches!(err, EmporiumError::Validation(_)));
}

#[tokio::test]
async fn test_create_duplicate_upc_is_conflict() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    dao.create(&create_test_product("012345678905", 3))
        .await
        .expect("Failed to create product");

    let err = dao
        .create(&create_test_product("012345678905", 4))
        .await
        .unwrap_err();
    assert!(matches!(err, EmporiumError::Conflict(_)));
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let result = dao
        .find_by_id(ProductId::from_i64(424242))
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_by_upc() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let created = dao
        .create(&create_test_product("036000291452", 5))
        .await
        .expect("Failed to create product");

    let found = dao
        .find_by_upc("036000291452")
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert_eq!(found.id, created.id);
    assert_eq!(found.category, 5);
}

#[tokio::test]
async fn test_find_by_upc_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let result = dao
        .find_by_upc("999999999999")
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_by_category() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let first = dao
        .create(&create_test_product("000000000017", 7))
        .await
        .expect("Failed to create product");
    dao.create(&create_test_product("000000000024", 3))
        .await
        .expect("Failed to create product");
    let second = dao
        .create(&create_test_product("000000000031", 7))
        .await
        .expect("Failed to create product");

    let matches = dao.find_by_category(7).await.expect("Query failed");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, first.id);
    assert_eq!(matches[1].id, second.id);
    assert!(matches.iter().all(|p| p.category == 7));
}

#[tokio::test]
async fn test_find_by_category_empty() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let matches = dao.find_by_category(99).await.expect("Query failed");
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_update() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let mut product = dao
        .create(&create_test_product("012345678905", 3))
        .await
        .expect("Failed to create product");

    product.name = "renamed widget".to_string();
    product.category = 8;

    let updated = dao.update(&product).await.expect("Failed to update");
    assert_eq!(updated.name, "renamed widget");
    assert_eq!(updated.category, 8);

    let found = dao
        .find_by_id(product.id.unwrap())
        .await
        .expect("Query failed")
        .expect("Product not found");
    assert_eq!(found.name, "renamed widget");
    assert_eq!(found.category, 8);
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let err = dao
        .update(&create_test_product("012345678905", 3))
        .await
        .unwrap_err();
    assert!(matches!(err, EmporiumError::Validation(_)));
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let mut product = create_test_product("012345678905", 3);
    product.id = Some(ProductId::from_i64(424242));

    let err = dao.update(&product).await.unwrap_err();
    assert!(matches!(err, EmporiumError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let product = dao
        .create(&create_test_product("012345678905", 3))
        .await
        .expect("Failed to create product");
    let id = product.id.unwrap();

    assert!(dao.delete(id).await.expect("Failed to delete"));
    assert!(dao.find_by_id(id).await.expect("Query failed").is_none());

    // Second delete affects zero rows
    assert!(!dao.delete(id).await.expect("Failed to delete"));
}
