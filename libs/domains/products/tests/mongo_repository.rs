//! Integration tests for the MongoDB product repository
//!
//! These tests spin up a real MongoDB container per test via testcontainers,
//! so they need a working Docker daemon.

use domain_products::{
    MongoProductRepository, ProductError, ProductInput, ProductService, ProductStatus,
    UpdatePolicy,
};
use test_utils::TestMongo;
use uuid::Uuid;

fn unique_db_name(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

fn product_input(name: &str, category: &str, price: f64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: format!("{} description", name),
        image_path: format!("/images/{}.png", name),
        ..Default::default()
    }
}

async fn setup(prefix: &str) -> (TestMongo, ProductService<MongoProductRepository>) {
    let mongo = TestMongo::new().await;
    let db = mongo.database(&unique_db_name(prefix));
    let repository = MongoProductRepository::new(db);
    repository
        .init_indexes()
        .await
        .expect("Failed to create indexes");
    let service = ProductService::new(repository);
    (mongo, service)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn create_then_get_by_id_round_trips() {
    let (_mongo, service) = setup("create_get").await;

    let created = service
        .create(product_input("laptop", "electronics", 999.99).into_product())
        .await
        .expect("create failed");
    assert!(!created.id.is_empty());

    let fetched = service.get_by_id(&created.id).await.expect("get failed");
    assert_eq!(fetched.name, "laptop");
    assert_eq!(fetched.category, "electronics");
    assert_eq!(fetched.status, ProductStatus::Active);
    assert_eq!(fetched.image_path, "/images/laptop.png");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn create_discards_caller_supplied_id() {
    let (_mongo, service) = setup("create_id").await;

    let mut input = product_input("mouse", "peripherals", 19.9);
    input.id = "caller-chosen".to_string();

    let created = service.create(input.into_product()).await.expect("create failed");
    assert_ne!(created.id, "caller-chosen");
    assert!(
        service.get_by_id("caller-chosen").await.is_err(),
        "caller id must not be persisted"
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn remove_soft_deletes_and_hides_from_listings() {
    let (_mongo, service) = setup("remove").await;

    let kept = service
        .create(product_input("keyboard", "peripherals", 49.9).into_product())
        .await
        .expect("create failed");
    let removed = service
        .create(product_input("trackball", "peripherals", 39.9).into_product())
        .await
        .expect("create failed");

    service.remove(&removed.id).await.expect("remove failed");

    // Listings only show active products
    let all = service.get_all().await.expect("get_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);

    let by_category = service
        .get_by_category("peripherals")
        .await
        .expect("get_by_category failed");
    assert_eq!(by_category.len(), 1);

    // Direct lookup still resolves the soft-deleted product
    let fetched = service.get_by_id(&removed.id).await.expect("get failed");
    assert_eq!(fetched.status, ProductStatus::Inactive);
    assert_eq!(fetched.name, "trackball");
    assert_eq!(fetched.price, 39.9);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn remove_missing_product_is_not_found() {
    let (_mongo, service) = setup("remove_missing").await;

    let err = service.remove("does-not-exist").await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn get_by_ids_includes_inactive_and_skips_unknown() {
    let (_mongo, service) = setup("get_by_ids").await;

    let active = service
        .create(product_input("camera", "electronics", 299.0).into_product())
        .await
        .expect("create failed");
    let inactive = service
        .create(product_input("tripod", "electronics", 59.0).into_product())
        .await
        .expect("create failed");
    service.remove(&inactive.id).await.expect("remove failed");

    let ids = vec![
        active.id.clone(),
        inactive.id.clone(),
        "unknown".to_string(),
    ];
    let mut products = service.get_by_ids(&ids).await.expect("get_by_ids failed");
    products.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "camera");
    assert_eq!(products[1].name, "tripod");
    assert_eq!(products[1].status, ProductStatus::Inactive);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn category_listing_filters_by_category() {
    let (_mongo, service) = setup("category").await;

    service
        .create(product_input("novel", "books", 12.0).into_product())
        .await
        .expect("create failed");
    service
        .create(product_input("webcam", "electronics", 45.0).into_product())
        .await
        .expect("create failed");

    let books = service
        .get_by_category("books")
        .await
        .expect("get_by_category failed");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].name, "novel");

    let empty = service
        .get_by_category("furniture")
        .await
        .expect("get_by_category failed");
    assert!(empty.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn update_with_empty_body_id_persists_under_target_id() {
    let (_mongo, service) = setup("update").await;

    let created = service
        .create(product_input("ssd", "storage", 89.0).into_product())
        .await
        .expect("create failed");

    let mut replacement = product_input("ssd", "storage", 79.0).into_product();
    replacement.id = String::new();
    service
        .update(&created.id, replacement)
        .await
        .expect("update failed");

    let fetched = service.get_by_id(&created.id).await.expect("get failed");
    assert_eq!(fetched.price, 79.0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn permissive_update_of_missing_target_is_a_noop() {
    let (_mongo, service) = setup("update_noop").await;

    let mut ghost = product_input("ghost", "misc", 1.0).into_product();
    ghost.id = String::new();
    service
        .update("missing-id", ghost)
        .await
        .expect("permissive update should not fail");

    assert!(service.get_by_id("missing-id").await.is_err());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn strict_update_of_missing_target_is_not_found() {
    let mongo = TestMongo::new().await;
    let db = mongo.database(&unique_db_name("strict"));
    let service = ProductService::with_policy(MongoProductRepository::new(db), UpdatePolicy::Strict);

    let mut ghost = product_input("ghost", "misc", 1.0).into_product();
    ghost.id = String::new();
    let err = service.update("missing-id", ghost).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn removed_products_disappear_from_get_all_end_to_end() {
    let (_mongo, service) = setup("lifecycle").await;

    let created = service
        .create(product_input("headphones", "audio", 149.0).into_product())
        .await
        .expect("create failed");

    assert_eq!(service.get_all().await.expect("get_all failed").len(), 1);

    service.remove(&created.id).await.expect("remove failed");

    assert!(service.get_all().await.expect("get_all failed").is_empty());
}
