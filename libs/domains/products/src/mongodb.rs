//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductStatus};
use crate::repository::ProductRepository;

const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoProductRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Product>(COLLECTION);
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Create the compound index the filtered listings rely on
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "category": 1, "status": 1 })
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Filter matching only active products
    fn active_filter() -> Document {
        doc! { "status": ProductStatus::Active.to_string() }
    }

    /// Filter matching active products in a category
    fn category_filter(category: &str) -> Document {
        doc! {
            "$and": [
                { "category": category },
                { "status": ProductStatus::Active.to_string() },
            ]
        }
    }

    /// Filter matching products by id set, regardless of status
    fn ids_filter(ids: &[String]) -> Document {
        doc! { "_id": { "$in": ids } }
    }

    async fn find_products(&self, filter: Document) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(filter).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.find_products(Self::active_filter()).await
    }

    #[instrument(skip(self))]
    async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.find_products(Self::category_filter(category)).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    async fn get_by_ids(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
        self.find_products(Self::ids_filter(ids)).await
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: &str, product: Product) -> ProductResult<()> {
        // Matching zero documents is not an error here: the service layer
        // decides whether a missing target should fail.
        self.collection
            .replace_one(doc! { "_id": id }, &product)
            .await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(())
    }
}
