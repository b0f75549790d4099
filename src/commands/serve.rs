use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::info;

use docgate::backend::BackendClient;
use docgate::config::Config;
use docgate::gateway::GatewayServer;

/// Run the gateway until Ctrl-C
pub async fn handle_serve(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(addr) = listen {
        config.http.listen_addr = addr;
        config.validate()?;
    }

    info!("Backend at {}", config.backend.base_url);

    let backend = Arc::new(BackendClient::new(&config.backend)?);
    let server = GatewayServer::new(config.http.clone(), backend);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    server.run(shutdown_rx).await
}
