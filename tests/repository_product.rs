mod common;

use sqlx::PgPool;
use std::sync::Arc;

use product_catalog::domain::entities::NewProduct;
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::infrastructure::persistence::PgProductRepository;

fn new_product(name: &str, price: Option<f64>) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "desc".to_string(),
        price,
    }
}

#[sqlx::test]
async fn test_create_product(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let product = repo.create(new_product("Widget", Some(9.99))).await.unwrap();

    assert!(product.id > 0);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, Some(9.99));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_product(&pool, "Widget", "desc", Some(9.99)).await;
    let repo = PgProductRepository::new(Arc::new(pool));

    let found = repo.find_by_id(id).await.unwrap();

    let product = found.unwrap();
    assert_eq!(product.id, id);
    assert_eq!(product.name, "Widget");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let found = repo.find_by_id(999_999).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_update_overwrites_all_fields(pool: PgPool) {
    let id = common::create_test_product(&pool, "Widget", "old", Some(1.0)).await;
    let repo = PgProductRepository::new(Arc::new(pool));

    let updated = repo
        .update(id, new_product("Widget v2", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Widget v2");
    assert_eq!(updated.description, "desc");
    // Full overwrite: the price is cleared, not retained.
    assert_eq!(updated.price, None);
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let updated = repo.update(999_999, new_product("X", None)).await.unwrap();

    assert!(updated.is_none());
}

#[sqlx::test]
async fn test_delete_product(pool: PgPool) {
    let pool = Arc::new(pool);
    let id = common::create_test_product(&pool, "Widget", "desc", None).await;
    let repo = PgProductRepository::new(pool.clone());

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    // Second delete finds nothing.
    assert!(!repo.delete(id).await.unwrap());
}
