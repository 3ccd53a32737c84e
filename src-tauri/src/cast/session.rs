use anyhow::{bail, Result};
use tokio::sync::mpsc;

use super::CastRequest;

/// Remote playback transport. Implemented by whatever cast SDK the shell is
/// linked against; this crate only hands it requests and reads its state.
pub trait CastSession: Send + Sync {
    /// Friendly name of the connected receiver, if any.
    fn connected_device(&self) -> Option<String>;

    fn load_media(&self, request: &CastRequest) -> Result<()>;

    /// Session-manager callbacks. An adapter hands out its receiver once;
    /// [`CastController::follow_session_events`](super::CastController::follow_session_events)
    /// drains it into the status line.
    fn take_events(&self) -> Option<mpsc::UnboundedReceiver<SessionEvent>> {
        None
    }
}

/// Lifecycle callbacks from the cast SDK's session manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Resumed,
    Ended { error: Option<String> },
    FailedToStart { error: String },
    FailedToResume { error: String },
}

/// Session used until a receiver is paired: never connected.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedCastSession;

impl CastSession for DisconnectedCastSession {
    fn connected_device(&self) -> Option<String> {
        None
    }

    fn load_media(&self, _request: &CastRequest) -> Result<()> {
        bail!("no cast session")
    }
}
