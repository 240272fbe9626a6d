//! Products gRPC service implementation
//!
//! Exposes the bulk-fetch endpoint used by other services to resolve a set
//! of product ids in one round trip.

use std::sync::Arc;

use domain_products::{Product, ProductRepository, ProductService};
use rpc::products::{
    GetProductsRequest, GetProductsResponse, ProductSummary,
    products_service_server::ProductsService,
};
use tonic::{Request, Response, Status};

/// gRPC service implementation for products
///
/// Wraps the domain ProductService and handles domain to proto conversions.
/// Generic over the repository type for testability.
pub struct ProductsGrpcService<R>
where
    R: ProductRepository + 'static,
{
    service: Arc<ProductService<R>>,
}

impl<R> ProductsGrpcService<R>
where
    R: ProductRepository + 'static,
{
    /// Create a new products gRPC service
    pub fn new(service: ProductService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Map a product to its wire summary; prices travel as fixed two-decimal strings
fn to_summary(product: Product) -> ProductSummary {
    ProductSummary {
        id: product.id,
        name: product.name,
        price: format!("{:.2}", product.price),
        category: product.category,
    }
}

#[tonic::async_trait]
impl<R> ProductsService for ProductsGrpcService<R>
where
    R: ProductRepository + 'static,
{
    async fn get_products(
        &self,
        request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let ids = request.into_inner().ids;
        let products = self
            .service
            .get_by_ids(&ids)
            .await
            .map_err(|e| Status::internal(e.to_string()))?;

        Ok(Response::new(GetProductsResponse {
            products: products.into_iter().map(to_summary).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain_products::{ProductError, ProductResult, ProductStatus};

    fn sample_product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: "Laptop".into(),
            description: "Portable computer".into(),
            price,
            category: "electronics".into(),
            status: ProductStatus::Active,
            image_path: String::new(),
        }
    }

    /// In-memory stand-in that resolves every requested id, or fails outright
    struct StubRepository {
        fail: bool,
        known_ids: Vec<String>,
    }

    #[async_trait]
    impl ProductRepository for StubRepository {
        async fn get_all(&self) -> ProductResult<Vec<Product>> {
            Ok(vec![])
        }

        async fn get_by_category(&self, _category: &str) -> ProductResult<Vec<Product>> {
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: &str) -> ProductResult<Option<Product>> {
            Ok(None)
        }

        async fn get_by_ids(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
            if self.fail {
                return Err(ProductError::Unexpected("connection reset".into()));
            }
            Ok(ids
                .iter()
                .filter(|id| self.known_ids.contains(id))
                .map(|id| sample_product(id, 5.0))
                .collect())
        }

        async fn create(&self, product: Product) -> ProductResult<Product> {
            Ok(product)
        }

        async fn update(&self, _id: &str, _product: Product) -> ProductResult<()> {
            Ok(())
        }
    }

    #[test]
    fn summary_formats_price_with_two_decimals() {
        let summary = to_summary(sample_product("p-1", 999.9));
        assert_eq!(summary.price, "999.90");

        let summary = to_summary(sample_product("p-2", 10.0));
        assert_eq!(summary.price, "10.00");

        let summary = to_summary(sample_product("p-3", 19.999));
        assert_eq!(summary.price, "20.00");
    }

    #[test]
    fn summary_drops_non_wire_fields() {
        let summary = to_summary(sample_product("p-1", 1.0));
        assert_eq!(summary.id, "p-1");
        assert_eq!(summary.name, "Laptop");
        assert_eq!(summary.category, "electronics");
    }

    #[tokio::test]
    async fn get_products_resolves_requested_ids() {
        let repo = StubRepository {
            fail: false,
            known_ids: vec!["a".into(), "b".into()],
        };

        let grpc = ProductsGrpcService::new(ProductService::new(repo));
        let response = grpc
            .get_products(Request::new(GetProductsRequest {
                ids: vec!["a".into(), "b".into()],
            }))
            .await
            .unwrap();

        let products = response.into_inner().products;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].price, "5.00");
    }

    #[tokio::test]
    async fn get_products_with_no_matches_returns_empty_response() {
        let repo = StubRepository {
            fail: false,
            known_ids: vec![],
        };

        let grpc = ProductsGrpcService::new(ProductService::new(repo));
        let response = grpc
            .get_products(Request::new(GetProductsRequest {
                ids: vec!["missing".into()],
            }))
            .await
            .unwrap();

        assert!(response.into_inner().products.is_empty());
    }

    #[tokio::test]
    async fn repository_failure_surfaces_as_internal_status() {
        let repo = StubRepository {
            fail: true,
            known_ids: vec![],
        };

        let grpc = ProductsGrpcService::new(ProductService::new(repo));
        let status = grpc
            .get_products(Request::new(GetProductsRequest { ids: vec![] }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
