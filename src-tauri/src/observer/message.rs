use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::{patterns::resolve, Hit};

/// Payload of the `record_stream_hit` command.
///
/// The sniffer sends `{url, ts}`; a bare URL string is also accepted and is
/// stamped with host time on arrival.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HitMessage {
    Bare(String),
    Event {
        url: String,
        #[serde(default, alias = "timestampMillis")]
        ts: Option<Value>,
    },
}

impl HitMessage {
    /// Event time wins over `now` whenever the message carries a usable one.
    pub fn into_hit(self, page_url: Option<&Url>, now: DateTime<Utc>) -> Hit {
        let (url, observed_at) = match self {
            HitMessage::Bare(url) => (url, now),
            HitMessage::Event { url, ts } => {
                let observed_at = ts.as_ref().and_then(timestamp_from_millis).unwrap_or(now);
                (url, observed_at)
            }
        };

        let trimmed = url.trim();
        let url = if trimmed.is_empty() {
            String::new()
        } else {
            resolve(trimmed, page_url)
        };

        Hit { url, observed_at }
    }
}

fn timestamp_from_millis(value: &Value) -> Option<DateTime<Utc>> {
    let millis = value.as_f64()?;
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(9_000_000).unwrap()
    }

    #[test]
    fn event_timestamp_is_preferred() {
        let message: HitMessage = serde_json::from_value(json!({
            "url": "https://cdn.example/master.m3u8",
            "ts": 1_700_000_000_123_i64,
        }))
        .unwrap();

        let hit = message.into_hit(None, now());
        assert_eq!(hit.url, "https://cdn.example/master.m3u8");
        assert_eq!(hit.observed_at.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn accepts_timestamp_alias_and_fractional_millis() {
        let message: HitMessage = serde_json::from_value(json!({
            "url": "https://cdn.example/a.mp4",
            "timestampMillis": 1234.6,
        }))
        .unwrap();

        assert_eq!(message.into_hit(None, now()).observed_at.timestamp_millis(), 1235);
    }

    #[test]
    fn bare_string_uses_host_time() {
        let message: HitMessage =
            serde_json::from_value(json!("https://cdn.example/chunk1.ts")).unwrap();
        let hit = message.into_hit(None, now());
        assert_eq!(hit.url, "https://cdn.example/chunk1.ts");
        assert_eq!(hit.observed_at, now());
    }

    #[test]
    fn unusable_timestamp_falls_back_to_host_time() {
        for ts in [json!("yesterday"), json!(null), json!(1e300)] {
            let message: HitMessage = serde_json::from_value(json!({
                "url": "https://cdn.example/a.mp4",
                "ts": ts,
            }))
            .unwrap();
            assert_eq!(message.into_hit(None, now()).observed_at, now());
        }
    }

    #[test]
    fn relative_urls_resolve_against_the_page() {
        let page = Url::parse("https://cdn.example/watch/42").unwrap();
        let message: HitMessage = serde_json::from_value(json!({ "url": "hls/master.m3u8" })).unwrap();
        let hit = message.into_hit(Some(&page), now());
        assert_eq!(hit.url, "https://cdn.example/watch/hls/master.m3u8");
    }

    #[test]
    fn blank_url_stays_blank_instead_of_resolving_to_the_page() {
        let page = Url::parse("https://cdn.example/watch/42").unwrap();
        let message: HitMessage = serde_json::from_value(json!({ "url": "  " })).unwrap();
        assert_eq!(message.into_hit(Some(&page), now()).url, "");
    }

    #[test]
    fn payload_without_url_is_rejected() {
        assert!(serde_json::from_value::<HitMessage>(json!({ "ts": 1 })).is_err());
        assert!(serde_json::from_value::<HitMessage>(json!(42)).is_err());
    }
}
