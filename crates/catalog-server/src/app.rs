//! Application assembly and serving.

use crate::di::{build_module, CatalogModule};
use crate::startup::print_startup_info;
use axum::Router;
use catalog_config::AppConfig;
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::DatabasePoolInterface;
use catalog_rest::create_router;
use shaku::HasComponent;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

/// The catalog server application.
pub struct App {
    config: AppConfig,
}

impl App {
    /// Creates the application from a loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Connects the database and builds the router over the DI module.
    pub async fn build(&self) -> CatalogResult<(Arc<CatalogModule>, Router)> {
        let module = build_module(&self.config.database).await?;
        let router = create_router(module.as_ref(), &self.config.server);
        Ok((module, router))
    }

    /// Serves requests until a shutdown signal arrives, then closes the pool.
    pub async fn run(self) -> CatalogResult<()> {
        let (module, router) = self.build().await?;

        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| CatalogError::Internal(format!("Failed to bind {addr}: {e}")))?;

        info!("Starting REST server on http://{}", addr);
        print_startup_info(&self.config.server);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CatalogError::Internal(format!("REST server error: {e}")))?;

        let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
        pool.close().await;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use catalog_config::DatabaseConfig;
    use tower::ServiceExt;

    fn in_memory_config() -> AppConfig {
        AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_built_router_serves_readiness() {
        let app = App::new(in_memory_config());
        let (_module, router) = app.build().await.unwrap();

        let response = router
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_build_fails_on_unopenable_database() {
        let mut config = in_memory_config();
        config.database.url = "sqlite://missing-directory/catalog.db".to_string();

        let result = App::new(config).build().await;
        assert!(result.is_err());
    }
}
