use std::sync::Arc;

use chrono::Utc;
use url::Url;

use super::{patterns::should_report, Hit, HitSink};

/// Reports browser navigations that land directly on a media URL.
///
/// A link pointing at `movie.mp4` never goes through fetch, XHR or a media
/// element, so the injected sniffer cannot see it.
#[derive(Clone)]
pub struct NavigationObserver {
    sink: Arc<dyn HitSink>,
}

impl NavigationObserver {
    pub fn new(sink: Arc<dyn HitSink>) -> Self {
        Self { sink }
    }

    /// Always lets the navigation proceed.
    pub fn observe(&self, url: &Url) -> bool {
        if should_report(url.as_str()) {
            self.sink.deliver(Hit {
                url: url.to_string(),
                observed_at: Utc::now(),
            });
        }
        true
    }
}
