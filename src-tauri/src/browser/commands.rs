use tauri::{AppHandle, Manager, WebviewWindow};

use super::{normalize_address, BROWSER_WINDOW_LABEL};

fn browser_window(app: &AppHandle) -> Result<WebviewWindow, String> {
    app.get_webview_window(BROWSER_WINDOW_LABEL)
        .ok_or_else(|| "browser window not found".to_string())
}

/// Load address-bar input; returns the normalized URL for the field.
#[tauri::command]
pub async fn navigate(app: AppHandle, address: String) -> Result<String, String> {
    let url = normalize_address(&address).map_err(|e| e.to_string())?;
    browser_window(&app)?
        .navigate(url.clone())
        .map_err(|e| e.to_string())?;
    Ok(url.to_string())
}

#[tauri::command]
pub async fn go_back(app: AppHandle) -> Result<(), String> {
    browser_window(&app)?
        .eval("window.history.back()")
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn go_forward(app: AppHandle) -> Result<(), String> {
    browser_window(&app)?
        .eval("window.history.forward()")
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn reload(app: AppHandle) -> Result<(), String> {
    browser_window(&app)?
        .eval("window.location.reload()")
        .map_err(|e| e.to_string())
}
