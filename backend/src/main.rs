use example_template_backend::{
    config::Settings, create_router, initialize_backend, logging::init_logging, utils::log_memory_usage,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load();

    // Initialize logging
    init_logging(&settings.logging);
    info!(
        port = settings.server.port,
        cors = settings.features.enable_cors,
        request_logging = settings.features.enable_logging,
        "Loaded configuration"
    );

    let app_state = initialize_backend();
    let app = create_router(app_state, &settings);

    log_memory_usage();

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
