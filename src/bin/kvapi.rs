use std::sync::Arc;

use kvstore::config::GatewayConfig;
use kvstore::gateway::handlers;
use kvstore::rpc::{HttpStoreClient, StoreRpc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = GatewayConfig::from_env()?;

    // 1. Typed client for the store service:
    let store: Arc<dyn StoreRpc> = Arc::new(HttpStoreClient::new(&config.store_url));
    tracing::info!("Using store service at {}", config.store_url);

    // 2. Public routes:
    let app = handlers::router(store);

    // 3. Serve:
    tracing::info!("kvapi listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
