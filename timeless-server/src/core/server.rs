//! HTTP server startup and graceful shutdown

use std::future::IntoFuture;
use std::time::Duration;

use crate::api;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C / SIGTERM, then drain in-flight requests
    pub async fn run(self) -> anyhow::Result<()> {
        let app = api::build_app(&self.state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{addr}");

        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        // The grace period starts once the signal arrives; serve() returns
        // only after every connection has closed.
        tokio::select! {
            result = serve => result?,
            _ = async {
                shutdown_signal().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(timeout_ms = self.config.shutdown_timeout_ms, "Shutdown timeout elapsed, dropping open connections");
            }
        }

        self.state.pool.close().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
