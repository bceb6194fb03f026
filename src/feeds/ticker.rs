use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::events::Event;

/// Spawns a task that sends a Tick event every `period`.
/// Stops once the receiver is gone.
pub fn spawn(tx: mpsc::Sender<Event>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // First tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                tracing::debug!("[ticker] receiver closed");
                break;
            }
        }
    })
}
