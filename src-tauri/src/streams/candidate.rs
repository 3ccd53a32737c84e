use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::kind::{classify, StreamKind};

/// Extra rank a URL can earn from repeated sightings.
pub const MAX_HIT_BONUS: u32 = 20;

const UNKNOWN_HOST: &str = "unknown";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamCandidate {
    pub url: String,
    pub host: String,
    pub kind: StreamKind,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    hit_count: u32,
    score: u32,
}

impl StreamCandidate {
    /// First sighting of `url`. The caller is expected to pass a trimmed, non-empty string.
    pub(super) fn first_hit(url: String, at: DateTime<Utc>) -> Self {
        let kind = classify(&url);
        Self {
            host: host_for(&url),
            url,
            kind,
            first_seen: at,
            last_seen: at,
            hit_count: 1,
            score: score(kind, 1),
        }
    }

    /// Hit count and score move together; `first_seen`, `host` and `kind` never change.
    pub(super) fn register_hit(&mut self, at: DateTime<Utc>) {
        self.hit_count = self.hit_count.saturating_add(1);
        self.last_seen = at;
        self.score = score(self.kind, self.hit_count);
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

pub fn score(kind: StreamKind, hit_count: u32) -> u32 {
    kind.base_score() + hit_count.min(MAX_HIT_BONUS)
}

/// Host name, else the scheme, else "unknown" for unparseable input.
pub fn host_for(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => parsed.scheme().to_string(),
        },
        Err(_) => UNKNOWN_HOST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn score_is_capped() {
        for kind in [
            StreamKind::HlsManifest,
            StreamKind::DashManifest,
            StreamKind::Mp4,
            StreamKind::Segment,
            StreamKind::Blob,
            StreamKind::Other,
        ] {
            assert_eq!(score(kind, 1000), score(kind, 20));
            let mut previous = score(kind, 1);
            for hits in 2..40 {
                let current = score(kind, hits);
                assert!(current >= previous);
                previous = current;
            }
        }
    }

    #[test]
    fn repetition_never_lifts_segment_over_manifest() {
        assert!(score(StreamKind::Segment, u32::MAX) < score(StreamKind::Mp4, 1));
    }

    #[test]
    fn host_prefers_hostname_then_scheme() {
        assert_eq!(host_for("https://cdn.example/video/master.m3u8"), "cdn.example");
        assert_eq!(host_for("blob:https://x/abc"), "blob");
        assert_eq!(host_for("not a url"), "unknown");
        assert_eq!(host_for("/relative/path.m3u8"), "unknown");
    }

    #[test]
    fn register_hit_keeps_identity_fields() {
        let first = Utc.timestamp_millis_opt(1_000).unwrap();
        let later = Utc.timestamp_millis_opt(5_000).unwrap();
        let mut candidate =
            StreamCandidate::first_hit("https://cdn.example/a.mpd".to_string(), first);
        assert_eq!(candidate.score(), 96);

        candidate.register_hit(later);

        assert_eq!(candidate.hit_count(), 2);
        assert_eq!(candidate.score(), 97);
        assert_eq!(candidate.first_seen, first);
        assert_eq!(candidate.last_seen, later);
        assert_eq!(candidate.kind, StreamKind::DashManifest);
        assert_eq!(candidate.host, "cdn.example");
    }
}
