use crate::config::AppConfig;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub fn init_subscriber(config: &AppConfig) {
    // Forward `log` records (sqlx, sea-orm) into tracing
    tracing_log::LogTracer::init().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let formatter = fmt::layer().json();

    let subscriber = Registry::default().with(filter).with(formatter);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");
}
