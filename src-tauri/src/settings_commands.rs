use tauri::{AppHandle, Emitter, State};

use crate::{browser::normalize_address, settings::ShellSettings, AppState};

pub const SETTINGS_UPDATED_EVENT: &str = "shell-settings-updated";

#[tauri::command]
pub async fn get_shell_settings(state: State<'_, AppState>) -> Result<ShellSettings, String> {
    Ok(state.settings.shell())
}

#[tauri::command]
pub async fn set_shell_settings(
    settings: ShellSettings,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<ShellSettings, String> {
    let home_url = normalize_address(&settings.home_url).map_err(|e| e.to_string())?;
    let settings = ShellSettings {
        home_url: home_url.to_string(),
        ..settings
    };

    state
        .settings
        .update_shell(settings.clone())
        .map_err(|e| e.to_string())?;

    app_handle
        .emit(SETTINGS_UPDATED_EVENT, &settings)
        .map_err(|e| e.to_string())?;

    Ok(settings)
}
