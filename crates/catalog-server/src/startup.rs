//! Server startup utilities.

use catalog_config::{ObservabilityConfig, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. The format is JSON when the
/// configuration asks for it and human-readable otherwise.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},catalog={level},tower_http=debug,sqlx=warn",
            level = config.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____                 __           __     ______      __        __
   / __ \_________  ____/ /_  _______/ /_   / ____/___ _/ /_____ _/ /___  ____ _
  / /_/ / ___/ __ \/ __  / / / / ___/ __/  / /   / __ `/ __/ __ `/ / __ \/ __ `/
 / ____/ /  / /_/ / /_/ / /_/ / /__/ /_   / /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
/_/   /_/   \____/\__,_/\__,_/\___/\__/   \____/\__,_/\__/\__,_/_/\____/\__, /
                                                                      /____/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    let addr = server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}
