use tauri::State;

use crate::{
    streams::{classify, host_for},
    AppState,
};

use super::CastStatus;

#[tauri::command]
pub async fn get_cast_status(state: State<'_, AppState>) -> Result<CastStatus, String> {
    Ok(state.cast.status())
}

/// Cast a listed candidate, titled with its host. Returns the new status line.
#[tauri::command]
pub async fn cast_candidate(
    state: State<'_, AppState>,
    url: String,
    assume_live: bool,
) -> Result<CastStatus, String> {
    let (kind, title) = match state.streams.get(&url) {
        Some(candidate) => (candidate.kind, candidate.host),
        None => (classify(&url), host_for(&url)),
    };

    Ok(state.cast.cast(url.trim(), kind, Some(title), assume_live))
}
