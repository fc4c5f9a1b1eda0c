use std::sync::Arc;

use kvstore::config::StoreConfig;
use kvstore::rpc::{handlers, service::StoreService};
use kvstore::store::MemoryStore;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = StoreConfig::from_env()?;

    // Process-lifetime cancellation token: cancelled on ctrl-c so in-flight
    // engine operations observe the shutdown.
    let cancel = CancellationToken::new();

    // 1. Storage engine:
    let store = Arc::new(MemoryStore::new());

    // 2. Service adapter + RPC routes:
    let service = Arc::new(StoreService::new(store, cancel.clone()));
    let app = handlers::router(service);

    // 3. Serve until ctrl-c:
    tracing::info!("kvstored listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    let shutdown = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
