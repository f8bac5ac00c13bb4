//! # Prelaunch Signup Service Main Entry Point
//!
//! This is the main entry point for the prelaunch signup service.

use std::sync::Arc;

use prelaunch::migration::{Migrator, MigratorTrait};
use prelaunch::{
    config::ConfigLoader, db::init_pool, logging::init_subscriber, notify::ResendNotifier,
    server::run_server,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    init_subscriber(&config);

    // Log the loaded configuration with secrets redacted
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!(profile = %config.profile, configuration = %redacted_json, "Loaded configuration");
    }

    let db = init_pool(&config).await?;
    Migrator::up(&db, None).await?;

    let notifier = Arc::new(ResendNotifier::from_config(&config));

    run_server(config, db, notifier).await
}
