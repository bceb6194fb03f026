use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::events::Event;

/// Spawns a task that sends Shutdown on Ctrl+C.
pub fn spawn(tx: mpsc::Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "[shutdown] failed to listen for Ctrl+C");
            return;
        }
        tracing::info!("[shutdown] Ctrl+C received");
        let _ = tx.send(Event::Shutdown).await;
    })
}
