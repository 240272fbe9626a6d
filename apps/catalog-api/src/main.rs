use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{MongoProductRepository, ProductService};
use rpc::products::products_service_server::ProductsServiceServer;
use std::time::Duration;
use tonic::transport::Server;
use tracing::info;

mod api;
mod config;
mod grpc;
mod openapi;
mod state;

use config::Config;
use grpc::ProductsGrpcService;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes
    let repository = MongoProductRepository::new(db.clone());
    repository.init_indexes().await?;

    // Start the gRPC bulk-fetch service on its own port
    let grpc_addr: std::net::SocketAddr = config.grpc_address().parse()?;
    let grpc_service = ProductsGrpcService::new(ProductService::with_policy(
        MongoProductRepository::new(db.clone()),
        config.update_policy,
    ));

    let grpc_handle = tokio::spawn(async move {
        info!("ProductsService listening on {}", grpc_addr);
        Server::builder()
            .add_service(
                ProductsServiceServer::new(grpc_service)
                    // Enable zstd compression for requests and responses (3-5x faster than gzip)
                    .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
                    .send_compressed(tonic::codec::CompressionEncoding::Zstd),
            )
            .serve(grpc_addr)
            .await
    });

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app.clone()));

    info!("Starting Catalog API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: stopping gRPC server");
            grpc_handle.abort();
            info!("Shutting down: closing MongoDB connections");
            // MongoDB client closes automatically on drop
            drop(state.mongo_client);
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
