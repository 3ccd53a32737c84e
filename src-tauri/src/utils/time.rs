use chrono::{DateTime, Utc};

/// Compact "time since" label for the stream list: `now`, `42s`, `7m`, `3h`, `2d`.
pub fn format_last_seen(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - last_seen).num_seconds().max(0);

    if elapsed < 5 {
        return "now".to_string();
    }
    if elapsed < 60 {
        return format!("{elapsed}s");
    }

    let minutes = elapsed / 60;
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h");
    }

    format!("{}d", hours / 24)
}
