use url::Url;

/// Substrings that mark a URL as a likely media resource.
pub const MEDIA_URL_PATTERNS: [&str; 5] = [".m3u8", ".mpd", ".mp4", ".ts", ".m4s"];

pub const BLOB_SCHEME_PREFIX: &str = "blob:";

/// Cheap case-insensitive test deciding whether a URL is worth reporting.
pub fn should_report(url: &str) -> bool {
    let lowered = url.to_lowercase();
    lowered.starts_with(BLOB_SCHEME_PREFIX)
        || MEDIA_URL_PATTERNS
            .iter()
            .any(|pattern| lowered.contains(pattern))
}

/// Absolute form of `raw` against `base`.
///
/// Already-absolute input is returned untouched so the registry key matches
/// what the page reported. Anything that cannot be resolved falls back to the
/// raw string instead of being dropped.
pub fn resolve(raw: &str, base: Option<&Url>) -> String {
    if Url::parse(raw).is_ok() {
        return raw.to_string();
    }

    base.and_then(|base| base.join(raw).ok())
        .map(String::from)
        .unwrap_or_else(|| raw.to_string())
}
