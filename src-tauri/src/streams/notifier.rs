use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::log_info;

use super::CandidateRegistry;

const ENABLE_LOGS: bool = true;

pub const STREAMS_CHANGED_EVENT: &str = "streams-changed";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamsChanged {
    pub revision: u64,
    pub count: usize,
}

/// Owns the change-forwarding task; dropping it stops the task.
pub struct StreamsNotifier {
    cancel_token: CancellationToken,
}

impl StreamsNotifier {
    pub fn start<F>(registry: Arc<CandidateRegistry>, on_change: F) -> Self
    where
        F: Fn(StreamsChanged) + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let receiver = registry.subscribe();
        tauri::async_runtime::spawn(forward_changes(
            registry,
            receiver,
            cancel_token.clone(),
            on_change,
        ));
        Self { cancel_token }
    }
}

impl Drop for StreamsNotifier {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

/// Calls `on_change` once per observed revision until cancelled.
///
/// Bursts of hits coalesce: the watch channel only keeps the latest revision,
/// and the presentation side re-queries the full view anyway.
pub async fn forward_changes<F>(
    registry: Arc<CandidateRegistry>,
    mut receiver: watch::Receiver<u64>,
    cancel_token: CancellationToken,
    on_change: F,
) where
    F: Fn(StreamsChanged),
{
    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let revision = *receiver.borrow_and_update();
                on_change(StreamsChanged {
                    revision,
                    count: registry.len(),
                });
            }
        }
    }

    log_info!("Stream change forwarding stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn forwards_latest_revision_until_cancelled() {
        let registry = Arc::new(CandidateRegistry::new());
        let token = CancellationToken::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(forward_changes(
            Arc::clone(&registry),
            registry.subscribe(),
            token.clone(),
            move |event| {
                let _ = tx.send(event);
            },
        ));

        registry.record("https://cdn.example/master.m3u8", Utc::now());

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("change event in time")
            .expect("channel open");
        assert_eq!(event.revision, 1);
        assert_eq!(event.count, 1);

        registry.clear();
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("change event in time")
            .expect("channel open");
        assert_eq!(event.revision, 2);
        assert_eq!(event.count, 0);

        token.cancel();
        tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("task stops after cancel")
            .unwrap();
    }
}
