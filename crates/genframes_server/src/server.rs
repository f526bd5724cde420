//! Listener lifecycle.

use crate::{AppState, create_router};
use genframes_error::{ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Bind `addr` and serve the API until Ctrl-C.
#[instrument(skip(state))]
pub async fn serve(addr: &str, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    let local = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;
    info!("GenFrames listening on http://{}", local);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("GenFrames stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
