use chrono::Utc;
use serde::Serialize;
use tauri::State;
use url::Url;

use crate::{log_debug, observer::HitMessage, utils::format_last_seen, AppState};

use super::{RecordOutcome, StreamCandidate};

const ENABLE_LOGS: bool = false;

/// One line of the "Detected Streams" list.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    #[serde(flatten)]
    pub candidate: StreamCandidate,
    pub label: &'static str,
    pub last_seen_ago: String,
    pub can_cast: bool,
}

impl CandidateRow {
    pub fn from_candidate(candidate: StreamCandidate, now: chrono::DateTime<Utc>) -> Self {
        Self {
            label: candidate.kind.label(),
            last_seen_ago: format_last_seen(candidate.last_seen, now),
            can_cast: Url::parse(&candidate.url).is_ok(),
            candidate,
        }
    }
}

/// Entry point for the injected sniffer. Never fails for a well-formed payload.
#[tauri::command]
pub async fn record_stream_hit(
    hit: HitMessage,
    webview: tauri::Webview,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let page_url = webview.url().ok();
    let hit = hit.into_hit(page_url.as_ref(), Utc::now());

    if state.streams.record(&hit.url, hit.observed_at) == RecordOutcome::Updated {
        log_debug!("Repeat hit for {}", hit.url);
    }
    Ok(())
}

#[tauri::command]
pub async fn visible_candidates(
    state: State<'_, AppState>,
    filter_manifests_only: bool,
) -> Result<Vec<CandidateRow>, String> {
    let now = Utc::now();
    Ok(state
        .streams
        .visible_candidates(filter_manifests_only)
        .into_iter()
        .map(|candidate| CandidateRow::from_candidate(candidate, now))
        .collect())
}

#[tauri::command]
pub async fn clear_candidates(state: State<'_, AppState>) -> Result<(), String> {
    state.streams.clear();
    Ok(())
}
