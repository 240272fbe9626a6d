//! Products API routes
//!
//! This module wires up the products domain to HTTP routes.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoProductRepository::new(state.db.clone());

    // Create the service with the configured update policy
    let service = ProductService::with_policy(repository, state.config.update_policy);

    // Return the domain's router
    handlers::router(service)
}
