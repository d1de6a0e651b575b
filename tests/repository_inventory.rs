mod common;

use sqlx::PgPool;
use std::sync::Arc;

use product_catalog::domain::entities::NewInventory;
use product_catalog::domain::repositories::InventoryRepository;
use product_catalog::infrastructure::persistence::PgInventoryRepository;

#[sqlx::test]
async fn test_create_inventory(pool: PgPool) {
    let product_id = common::create_test_product(&pool, "Widget", "desc", None).await;
    let warehouse_id = common::create_test_warehouse(&pool, "North").await;
    let repo = PgInventoryRepository::new(Arc::new(pool));

    let inventory = repo
        .create(NewInventory {
            product_id,
            warehouse_id,
            quantity: 7,
        })
        .await
        .unwrap();

    assert!(inventory.id > 0);
    assert_eq!(inventory.product_id, product_id);
    assert_eq!(inventory.warehouse_id, warehouse_id);
    assert_eq!(inventory.quantity, 7);
}

#[sqlx::test]
async fn test_create_inventory_rejects_dangling_product(pool: PgPool) {
    let warehouse_id = common::create_test_warehouse(&pool, "North").await;
    let repo = PgInventoryRepository::new(Arc::new(pool));

    let result = repo
        .create(NewInventory {
            product_id: 999_999,
            warehouse_id,
            quantity: 1,
        })
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_find_by_product_id(pool: PgPool) {
    let product_id = common::create_test_product(&pool, "Widget", "desc", None).await;
    let other_product_id = common::create_test_product(&pool, "Other", "desc", None).await;
    let warehouse_a = common::create_test_warehouse(&pool, "North").await;
    let warehouse_b = common::create_test_warehouse(&pool, "South").await;

    common::create_test_inventory(&pool, product_id, warehouse_a, 5).await;
    common::create_test_inventory(&pool, product_id, warehouse_b, 0).await;
    common::create_test_inventory(&pool, other_product_id, warehouse_a, 9).await;

    let repo = PgInventoryRepository::new(Arc::new(pool));
    let rows = repo.find_by_product_id(product_id).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.product_id == product_id));
}

#[sqlx::test]
async fn test_find_by_product_id_empty(pool: PgPool) {
    let product_id = common::create_test_product(&pool, "Widget", "desc", None).await;
    let repo = PgInventoryRepository::new(Arc::new(pool));

    let rows = repo.find_by_product_id(product_id).await.unwrap();

    assert!(rows.is_empty());
}

#[sqlx::test]
async fn test_find_by_product_id_unknown_product(pool: PgPool) {
    let repo = PgInventoryRepository::new(Arc::new(pool));

    // Unknown product id: empty sequence, not an error.
    let rows = repo.find_by_product_id(999_999).await.unwrap();

    assert!(rows.is_empty());
}

#[sqlx::test]
async fn test_find_by_id_and_delete(pool: PgPool) {
    let product_id = common::create_test_product(&pool, "Widget", "desc", None).await;
    let warehouse_id = common::create_test_warehouse(&pool, "North").await;
    let id = common::create_test_inventory(&pool, product_id, warehouse_id, 3).await;

    let repo = PgInventoryRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(id).await.unwrap().is_some());
    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
