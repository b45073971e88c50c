//! # Product Catalog Server
//!
//! Loads configuration, installs logging and serves the REST API.

use catalog_config::ConfigLoader;
use catalog_core::CatalogResult;
use catalog_server::{startup, App};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> CatalogResult<()> {
    let config = ConfigLoader::from_default_location()?.into_config();

    startup::init_logging(&config.observability);
    startup::print_banner();

    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    App::new(config).run().await
}
