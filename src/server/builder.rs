//! Service entry point
//!
//! `run_server` loads configuration, builds the HTTP server, and blocks
//! until shutdown. This is what `main` calls after parsing arguments.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::{info, warn};

/// Default configuration path when none is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/freshguard.yaml";

/// Run the server with automatic configuration loading
///
/// Loads the given config file (or `config/freshguard.yaml`), falling back
/// to defaults with environment overrides when the file is missing.
pub async fn run_server(config_path: Option<&str>) -> Result<()> {
    info!("🚀 Starting FreshGuard alert service");

    let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
    info!("📄 Loading configuration file: {}", path);

    let config = match Config::from_file(path).await {
        Ok(config) => {
            info!("✅ Configuration file loaded successfully");
            config
        }
        Err(e) => {
            warn!(
                "⚠️  Configuration file loading failed, using defaults with environment overrides: {}",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "🌐 Server starting at: http://{}",
        config.server().address()
    );
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/v1/alerts - Active alerts");
    info!("   GET  /api/v1/alerts/count - Active alert count");
    info!("   POST /api/v1/alerts/generate - Generate alerts");
    info!("   POST /api/v1/alerts/{{id}}/dismiss - Dismiss one alert");
    info!("   POST /api/v1/alerts/dismiss-all - Dismiss all alerts");

    server.start().await
}
