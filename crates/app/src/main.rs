//! Shop entry point.

use app::{AppError, Config, Shop, telemetry};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    telemetry::init_tracing(&config);

    // 2. Install Prometheus metrics recorder if requested
    let metrics_handle = if config.metrics {
        Some(telemetry::install_metrics()?)
    } else {
        None
    };

    // 3. Wire the shop and run the startup scenario
    let shop = Shop::with_default_handlers();
    tracing::debug!(dispatcher = ?shop.dispatcher, "handlers registered");
    let summary = app::run(&shop).await?;

    tracing::info!(
        customer = summary.customer.name(),
        active = summary.customer.is_active(),
        "shop finished"
    );

    if let Some(handle) = metrics_handle {
        tracing::info!(metrics = %handle.render(), "metrics snapshot");
    }

    Ok(())
}
