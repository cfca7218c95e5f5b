//! Handle to a running dev server.

use axum_server::Handle;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tokio::task::JoinHandle;

use crate::error::LaunchError;

/// Time in-flight requests get to finish after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// A dev server running on a background task.
///
/// Dropping the handle leaves the server running; use [`DevServerHandle::shutdown`]
/// or [`DevServerHandle::serve_until_signal`] to stop it.
pub struct DevServerHandle {
    addr: SocketAddr,
    url: String,
    handle: Handle<SocketAddr>,
    task: JoinHandle<io::Result<()>>,
}

impl DevServerHandle {
    pub(crate) fn new(
        addr: SocketAddr,
        url: String,
        handle: Handle<SocketAddr>,
        task: JoinHandle<io::Result<()>>,
    ) -> Self {
        Self {
            addr,
            url,
            handle,
            task,
        }
    }

    /// Address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL the catalog is served at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stop accepting connections and wait up to `grace` for open ones.
    pub async fn shutdown(self, grace: Duration) -> Result<(), LaunchError> {
        self.handle.graceful_shutdown(Some(grace));
        join(self.task).await
    }

    /// Serve until Ctrl+C or SIGTERM, then shut down gracefully.
    ///
    /// Returns early with an error if the server task fails on its own.
    pub async fn serve_until_signal(self) -> Result<(), LaunchError> {
        let Self {
            handle, mut task, ..
        } = self;

        tokio::select! {
            res = shutdown_signal() => {
                if let Err(e) = res {
                    tracing::error!("Error while waiting for shutdown signal: {e}");
                }
                tracing::info!("shutdown signal received, stopping dev server");
                handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
                join(task).await
            }
            res = &mut task => flatten(res),
        }
    }
}

impl std::fmt::Debug for DevServerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevServerHandle")
            .field("addr", &self.addr)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

async fn join(task: JoinHandle<io::Result<()>>) -> Result<(), LaunchError> {
    flatten(task.await)
}

fn flatten(res: Result<io::Result<()>, tokio::task::JoinError>) -> Result<(), LaunchError> {
    match res {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(LaunchError::Server(e.to_string())),
        Err(e) => Err(LaunchError::Server(e.to_string())),
    }
}

/// Wait for Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() -> io::Result<()> {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<_, io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<io::Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
