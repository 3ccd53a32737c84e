use super::patterns::{BLOB_SCHEME_PREFIX, MEDIA_URL_PATTERNS};

/// IPC command the injected script reports hits through.
pub const RECORD_HIT_COMMAND: &str = "record_stream_hit";

/// Window flag that keeps the sniffer from wrapping the same globals twice.
pub const INSTALL_GUARD_FLAG: &str = "__browseCasterStreamSnifferInstalled";

const SNIFFER_TEMPLATE: &str = include_str!("stream_sniffer.js");

/// Initialization script injected at document start into every browser page.
///
/// The pattern table is serialized from the host-side constants so both ends
/// agree on what counts as a candidate.
pub fn stream_sniffer_script() -> String {
    let patterns =
        serde_json::to_string(&MEDIA_URL_PATTERNS).unwrap_or_else(|_| "[]".to_string());

    SNIFFER_TEMPLATE
        .replace("__GUARD_FLAG__", INSTALL_GUARD_FLAG)
        .replace("__PATTERNS__", &patterns)
        .replace("__BLOB_PREFIX__", &js_string(BLOB_SCHEME_PREFIX))
        .replace("__COMMAND__", &js_string(RECORD_HIT_COMMAND))
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
