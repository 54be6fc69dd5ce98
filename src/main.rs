use roster::config::CONFIG;
use roster::infrastructure::storage::mongo;
use roster::{RosterService, app};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => error!("Failed to listen for SIGTERM: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting with {:?}", *CONFIG);

    // Connect once; the listener never starts without a store
    let storage = match mongo::connect(&CONFIG.mongo_uri).await {
        Ok(storage) => storage,
        Err(err) => {
            error!("MongoDB connection failed: {}", err);
            std::process::exit(1);
        }
    };
    let service = Arc::new(RosterService::new(Arc::new(storage)));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
