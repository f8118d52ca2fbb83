use std::time::Instant;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use docker_app::config::AppConfig;
use docker_app::routes;
use docker_app::server;
use docker_app::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        server_host = %config.server_host,
        server_port = config.server_port,
        environment = config.environment_label(),
        "loaded configuration"
    );

    let listener = server::bind(&config).await?;
    let port = server::local_port(&listener)?;
    let environment = config.environment_label().to_string();

    let state = AppState::new(config, started_at);
    let router = routes::create_router(state);

    tracing::info!("app running on port {} in {} mode", port, environment);
    server::serve(listener, router, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown signal"),
        Err(err) => {
            tracing::error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
