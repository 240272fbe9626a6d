use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all active products
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// List active products in a category
    async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Get a product by ID, regardless of status
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Get products whose IDs are in the given set, regardless of status
    async fn get_by_ids(&self, ids: &[String]) -> ProductResult<Vec<Product>>;

    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product stored under the given ID
    async fn update(&self, id: &str, product: Product) -> ProductResult<()>;
}
