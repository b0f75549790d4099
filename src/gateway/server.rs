//! Gateway HTTP Server
//!
//! Axum-based server for the browser-facing gateway.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Method;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::BackendClient;
use crate::config::HttpConfig;

use super::handlers::AppState;
use super::routes::create_router;

/// Browser-facing gateway server
pub struct GatewayServer {
    config: HttpConfig,
    backend: Arc<BackendClient>,
}

impl GatewayServer {
    /// Create a new gateway server
    pub fn new(config: HttpConfig, backend: Arc<BackendClient>) -> Self {
        Self { config, backend }
    }

    /// Run the gateway server
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .listen_addr
            .parse()
            .context("Invalid gateway listen address")?;

        let app_state = AppState {
            backend: self.backend.clone(),
        };

        let mut app = create_router(app_state);

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(Any);
            app = app.layer(cors);
        }

        app = app.layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .context("Failed to bind gateway server")?;

        info!("Gateway listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                info!("Gateway shutting down");
            })
            .await
            .context("Gateway server error")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listen_addr() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        assert_eq!(addr.port(), 3000);

        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
