use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_products, create_product, update_product, remove_product),
    components(
        schemas(Product, ProductInput),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Query parameters for product lookup
///
/// `id` takes precedence over `category`; with neither set, all active
/// products are returned.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Look up a single product by ID
    pub id: Option<String>,
    /// List active products in a category
    pub category: Option<String>,
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_products).post(create_product))
        .route("/{id}", put(update_product).delete(remove_product))
        .with_state(shared_service)
}

/// Fetch products by id, by category, or all active products
///
/// A single match is returned as a bare object rather than a one-element
/// array; no match at all is a 404.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<serde_json::Value>> {
    let products = match (query.id, query.category) {
        (Some(id), _) => vec![service.get_by_id(&id).await?],
        (None, Some(category)) => service.get_by_category(&category).await?,
        (None, None) => service.get_all().await?,
    };

    match products.as_slice() {
        [] => Err(ProductError::NotFound),
        [single] => Ok(Json(serde_json::json!(single))),
        _ => Ok(Json(serde_json::json!(products))),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input.into_product()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace the product stored under the given ID
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<StatusCode> {
    service.update(&id, input.into_product()).await?;
    Ok(StatusCode::OK)
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.remove(&id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Laptop".into(),
            description: String::new(),
            price: 999.99,
            category: "electronics".into(),
            status: ProductStatus::Active,
            image_path: String::new(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_with_id_takes_precedence_over_category() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(sample_product(id))));
        repo.expect_get_by_category().never();

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?id=p-1&category=electronics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // A single match comes back as a bare object
        assert_eq!(json["_id"], "p-1");
    }

    #[tokio::test]
    async fn get_all_returns_array_for_multiple_matches() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![sample_product("p-1"), sample_product("p-2")]));

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_result_maps_to_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_category().returning(|_| Ok(vec![]));

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?category=empty")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_returns_201_with_fresh_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().returning(|p| Ok(p));

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "id": "caller-id",
                            "name": "Laptop",
                            "price": 999.99,
                            "category": "electronics"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_ne!(json["_id"], "caller-id");
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload() {
        let repo = MockProductRepository::new();

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "name": "",
                            "price": 1.0,
                            "category": "misc"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_missing_product_is_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let app = router(ProductService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
