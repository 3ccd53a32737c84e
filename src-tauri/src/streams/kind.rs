use serde::{Deserialize, Serialize};

use crate::observer::patterns::BLOB_SCHEME_PREFIX;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StreamKind {
    HlsManifest,
    DashManifest,
    Mp4,
    Segment,
    Blob,
    Other,
}

impl StreamKind {
    /// Short badge shown next to a candidate in the list.
    pub fn label(&self) -> &'static str {
        match self {
            StreamKind::HlsManifest => "HLS",
            StreamKind::DashManifest => "DASH",
            StreamKind::Mp4 => "MP4",
            StreamKind::Segment => "SEG",
            StreamKind::Blob => "BLOB",
            StreamKind::Other => "OTHER",
        }
    }

    pub fn is_manifest_like(&self) -> bool {
        matches!(
            self,
            StreamKind::HlsManifest | StreamKind::DashManifest | StreamKind::Mp4
        )
    }

    /// Manifests outrank single files, which outrank raw segments and opaque URLs.
    pub fn base_score(&self) -> u32 {
        match self {
            StreamKind::HlsManifest => 100,
            StreamKind::DashManifest => 95,
            StreamKind::Mp4 => 80,
            StreamKind::Segment => 10,
            StreamKind::Blob => 0,
            StreamKind::Other => 1,
        }
    }

    /// MIME type handed to the cast receiver for this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            StreamKind::HlsManifest => "application/x-mpegURL",
            StreamKind::DashManifest => "application/dash+xml",
            StreamKind::Mp4 => "video/mp4",
            StreamKind::Segment | StreamKind::Blob | StreamKind::Other => {
                "application/octet-stream"
            }
        }
    }
}

/// Classify a URL by case-insensitive substring tests, first match wins.
pub fn classify(url: &str) -> StreamKind {
    let lowered = url.to_lowercase();

    if lowered.starts_with(BLOB_SCHEME_PREFIX) {
        return StreamKind::Blob;
    }
    if lowered.contains(".m3u8") {
        return StreamKind::HlsManifest;
    }
    if lowered.contains(".mpd") {
        return StreamKind::DashManifest;
    }
    if lowered.contains(".mp4") {
        return StreamKind::Mp4;
    }
    if lowered.contains(".m4s") || lowered.contains(".ts") {
        return StreamKind::Segment;
    }

    StreamKind::Other
}
