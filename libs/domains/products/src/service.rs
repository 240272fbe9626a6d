//! Product Service - Business logic layer

use std::sync::Arc;
use strum::EnumString;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductStatus, new_product_id};
use crate::repository::ProductRepository;

/// How `update` treats a target id with no stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum UpdatePolicy {
    /// Write through without checking existence; a missing target is a no-op
    #[default]
    Permissive,
    /// Fail with NotFound when the target does not exist
    Strict,
}

/// Product service providing business logic operations
///
/// The service layer owns the product lifecycle rules: id assignment on
/// create, id fix-up on update, and soft deletion.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    update_policy: UpdatePolicy,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            update_policy: UpdatePolicy::default(),
        }
    }

    /// Create a new ProductService with an explicit update policy
    pub fn with_policy(repository: R, update_policy: UpdatePolicy) -> Self {
        Self {
            repository: Arc::new(repository),
            update_policy,
        }
    }

    /// List all active products
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// List active products in a category
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository.get_by_category(category).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Get products whose IDs are in the given set
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn get_by_ids(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
        self.repository.get_by_ids(ids).await
    }

    /// Create a new product
    ///
    /// Any id carried by the input is discarded and a fresh one is minted.
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create(&self, mut product: Product) -> ProductResult<Product> {
        product.id = new_product_id();
        self.repository.create(product).await
    }

    /// Update the product stored under the given ID
    ///
    /// A product with an empty id takes the target id. Under the strict
    /// policy the target must exist; the permissive policy lets a missing
    /// target fall through as a no-op.
    #[instrument(skip(self, product))]
    pub async fn update(&self, id: &str, mut product: Product) -> ProductResult<()> {
        if product.id.is_empty() {
            product.id = id.to_string();
        }

        if self.update_policy == UpdatePolicy::Strict {
            self.repository
                .get_by_id(id)
                .await?
                .ok_or(ProductError::NotFound)?;
        }

        self.repository.update(id, product).await
    }

    /// Soft-delete a product by flipping its status to inactive
    ///
    /// Absence and lookup failures both surface as NotFound.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> ProductResult<()> {
        let mut product = match self.repository.get_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) | Err(_) => return Err(ProductError::NotFound),
        };

        product.status = ProductStatus::Inactive;
        self.repository.update(id, product).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            update_policy: self.update_policy,
        }
    }
}
