use std::sync::Arc;

use tokio::sync::watch;
use url::Url;

use crate::{log_info, log_warn, streams::StreamKind};

use super::{CastRequest, CastSession, CastStatus, SessionEvent};

const ENABLE_LOGS: bool = true;

pub const CAST_STATUS_EVENT: &str = "cast-status-changed";

/// Turns candidate selections into play requests and tracks the status line.
#[derive(Clone)]
pub struct CastController {
    session: Arc<dyn CastSession>,
    status: Arc<watch::Sender<CastStatus>>,
}

impl CastController {
    pub fn new(session: Arc<dyn CastSession>) -> Self {
        let initial = status_for_session(session.as_ref());
        let (status, _) = watch::channel(initial);
        Self {
            session,
            status: Arc::new(status),
        }
    }

    pub fn status(&self) -> CastStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CastStatus> {
        self.status.subscribe()
    }

    pub fn cast(
        &self,
        url: &str,
        kind: StreamKind,
        title: Option<String>,
        assume_live: bool,
    ) -> CastStatus {
        let Ok(url) = Url::parse(url) else {
            return self.set_status(CastStatus::failed("invalid URL."));
        };

        if self.session.connected_device().is_none() {
            return self.set_status(CastStatus::NeedsDevice);
        }

        let request = CastRequest::new(url, kind, title, assume_live);
        match self.session.load_media(&request) {
            Ok(()) => {
                log_info!(
                    "Casting {} as {} ({:?})",
                    request.content_id(),
                    request.content_type,
                    request.stream_type
                );
                self.set_status(CastStatus::Casting)
            }
            Err(err) => {
                log_warn!("Cast load failed for {}: {:#}", request.content_id(), err);
                self.set_status(CastStatus::failed(err.to_string()))
            }
        }
    }

    /// Maps one session-manager callback onto the status line.
    pub fn handle_session_event(&self, event: SessionEvent) -> CastStatus {
        let status = match event {
            SessionEvent::Started | SessionEvent::Resumed => {
                status_for_session(self.session.as_ref())
            }
            SessionEvent::Ended { error: Some(error) }
            | SessionEvent::FailedToStart { error }
            | SessionEvent::FailedToResume { error } => CastStatus::failed(error),
            SessionEvent::Ended { error: None } => CastStatus::NotConnected,
        };
        self.set_status(status)
    }

    /// Applies the session's callbacks until the adapter drops its sender.
    /// Returns at once for sessions that expose no callbacks.
    pub async fn follow_session_events(&self) {
        let Some(mut events) = self.session.take_events() else {
            return;
        };
        while let Some(event) = events.recv().await {
            let status = self.handle_session_event(event);
            log_info!("Cast session status: {}", status);
        }
    }

    fn set_status(&self, status: CastStatus) -> CastStatus {
        self.status.send_replace(status.clone());
        status
    }
}

fn status_for_session(session: &dyn CastSession) -> CastStatus {
    match session.connected_device() {
        Some(device) if !device.is_empty() => CastStatus::Connected { device },
        Some(_) => CastStatus::Connected {
            device: "Cast device".to_string(),
        },
        None => CastStatus::NotConnected,
    }
}
