//! Page-side stream detection.
//!
//! The sniffer script runs inside every browser page and reports candidate
//! media URLs over IPC; everything here either generates that script or turns
//! what it (and the webview's own navigation callbacks) report into [`Hit`]s.

pub mod message;
pub mod navigation;
pub mod patterns;
pub mod script;

use chrono::{DateTime, Utc};

pub use message::HitMessage;
pub use navigation::NavigationObserver;
pub use script::stream_sniffer_script;

/// One observed occurrence of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub url: String,
    pub observed_at: DateTime<Utc>,
}

/// Receiving end of the observer. Delivery is fire-and-forget.
pub trait HitSink: Send + Sync {
    fn deliver(&self, hit: Hit);
}
