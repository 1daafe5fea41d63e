use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use portfolio_gallery::{
    constants::START_TIME,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    web::cors::build_cors,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    Lazy::force(&START_TIME);

    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let app_state = web::Data::new(AppState::bootstrap(&config).await?);

    if app_state.static_assets.is_some() {
        tracing::info!("Serving the built UI from {}", config.static_dir);
    } else {
        tracing::info!("Development mode: UI assets are not served, run the UI dev server separately");
    }

    let server_addr = config.server_addr();
    let json_limit = config.json_limit_bytes;

    tracing::info!(
        "🚀 Starting Portfolio Gallery v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&server_config))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(|cfg| configure_routes(cfg, json_limit))
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => {}
    }

    tracing::info!("Portfolio Gallery stopped");
    Ok(())
}
