use serde::Serialize;
use url::Url;

use crate::streams::StreamKind;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StreamType {
    Buffered,
    Live,
}

/// Everything the cast session needs to start remote playback.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CastRequest {
    pub url: Url,
    pub content_type: &'static str,
    pub title: Option<String>,
    pub stream_type: StreamType,
}

impl CastRequest {
    pub fn new(url: Url, kind: StreamKind, title: Option<String>, assume_live: bool) -> Self {
        Self {
            url,
            content_type: kind.content_type(),
            title: title.filter(|title| !title.trim().is_empty()),
            stream_type: if assume_live {
                StreamType::Live
            } else {
                StreamType::Buffered
            },
        }
    }

    /// Content id the receiver reports back; the absolute URL.
    pub fn content_id(&self) -> &str {
        self.url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(value: &str) -> Url {
        Url::parse(value).unwrap()
    }

    #[test]
    fn maps_kind_to_content_type() {
        let hls = CastRequest::new(url("https://x/a.m3u8"), StreamKind::HlsManifest, None, false);
        let dash = CastRequest::new(url("https://x/a.mpd"), StreamKind::DashManifest, None, false);
        let mp4 = CastRequest::new(url("https://x/a.mp4"), StreamKind::Mp4, None, false);
        let seg = CastRequest::new(url("https://x/a.ts"), StreamKind::Segment, None, false);

        assert_eq!(hls.content_type, "application/x-mpegURL");
        assert_eq!(dash.content_type, "application/dash+xml");
        assert_eq!(mp4.content_type, "video/mp4");
        assert_eq!(seg.content_type, "application/octet-stream");
    }

    #[test]
    fn live_flag_and_blank_titles() {
        let request = CastRequest::new(
            url("https://cdn.example/live.m3u8"),
            StreamKind::HlsManifest,
            Some("  ".to_string()),
            true,
        );
        assert_eq!(request.stream_type, StreamType::Live);
        assert_eq!(request.title, None);
        assert_eq!(request.content_id(), "https://cdn.example/live.m3u8");
    }
}
