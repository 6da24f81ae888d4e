// Serving loop with bounded graceful shutdown.
//
// Once the shutdown signal resolves the listener stops accepting connections
// and in-flight requests get `grace` to finish. Past that the server task is
// aborted and `ServeError::ForcedShutdown` is returned.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("server forced to shutdown: requests still running after {0:?}")]
    ForcedShutdown(Duration),
}

pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    grace: Duration,
    signal: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });
    let mut task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut task => return Ok(result??),
        () = signal => {}
    }

    tracing::info!(grace = ?grace, "shutting down server");
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut task).await {
        Ok(result) => Ok(result??),
        Err(_) => {
            task.abort();
            Err(ServeError::ForcedShutdown(grace))
        }
    }
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
