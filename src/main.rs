//! Server binary: loads settings, binds the listener, opens the MongoDB store, serves
//! until SIGINT/SIGTERM, then closes the store.

use std::sync::Arc;
use tokio::net::TcpListener;
use toy_catalog::{app, from_env, store, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("toy_catalog=info,tower_http=info")),
        )
        .init();

    let settings = from_env()?;
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    // Never fails: a client that cannot be built is replaced by one that answers 500.
    let db = store::open(&settings.mongo).await;

    let probe = Arc::clone(&db);
    tokio::spawn(async move {
        match probe.ping().await {
            Ok(()) => tracing::info!("pinged deployment, MongoDB connection ok"),
            Err(e) => tracing::error!(error = %e, "MongoDB ping failed"),
        }
    });

    let state = AppState::new(Arc::clone(&db));
    axum::serve(listener, app(state, settings.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("shutdown signal received");
}
