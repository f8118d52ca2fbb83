use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::make::Shared;

use crate::config::AppConfig;

/// Binds `server_host:server_port`; the host may be an IP literal or a resolvable name.
pub async fn bind(config: &AppConfig) -> Result<TcpListener> {
    TcpListener::bind((config.server_host.as_str(), config.server_port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.server_host, config.server_port))
}

/// Port the listener actually got, which differs from the configured one for port 0.
pub fn local_port(listener: &TcpListener) -> Result<u16> {
    let addr = listener.local_addr().context("failed to read listener address")?;
    Ok(addr.port())
}

/// Serves `router` until `shutdown` resolves, letting in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, Shared::new(router))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server terminated with an error")
}
