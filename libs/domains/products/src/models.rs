use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductStatus {
    /// Product is visible in listings
    #[default]
    Active,
    /// Product has been soft-deleted
    Inactive,
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category the product belongs to
    pub category: String,
    /// Current lifecycle status
    #[serde(default)]
    pub status: ProductStatus,
    /// Path to the product image
    #[serde(default)]
    pub image_path: String,
}

/// DTO for creating or replacing a product
///
/// The `id` is accepted but never trusted: create always mints a fresh
/// identifier, and update takes the id from the request path when the
/// body leaves it empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative by convention, not enforced
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub image_path: String,
}

/// Generate a new product identifier
pub fn new_product_id() -> String {
    Uuid::new_v4().to_string()
}

impl ProductInput {
    /// Convert into a Product entity, keeping whatever id the input carries
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            status: self.status,
            image_path: self.image_path,
        }
    }
}
