use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use domain_products::UpdatePolicy;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Port the gRPC bulk-fetch service listens on
    pub grpc_port: u16,
    /// How PUT handles a target id with no stored document
    pub update_policy: UpdatePolicy,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let grpc_port: u16 = env_or_default("GRPC_PORT", "50051")
            .parse()
            .map_err(|e| eyre::eyre!("Invalid GRPC_PORT: {}", e))?;

        let update_policy: UpdatePolicy = env_or_default("UPDATE_POLICY", "permissive")
            .parse()
            .map_err(|e| eyre::eyre!("Invalid UPDATE_POLICY: {}", e))?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            grpc_port,
            update_policy,
        })
    }

    /// Socket address for the gRPC server
    pub fn grpc_address(&self) -> String {
        format!("{}:{}", self.server.host, self.grpc_port)
    }
}
