use serde::Serialize;
use tauri::{
    webview::PageLoadEvent, Emitter, Manager, Runtime, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};
use url::Url;

use crate::observer::{stream_sniffer_script, NavigationObserver};

pub const BROWSER_WINDOW_LABEL: &str = "browser";

pub const LOCATION_CHANGED_EVENT: &str = "browser-location-changed";

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct LocationChangedEvent {
    url: String,
    loading: bool,
}

/// Opens the page window with the stream sniffer installed at document start in
/// the top frame and in every subframe, so embedded players are covered too.
pub fn open_browser_window<R: Runtime, M: Manager<R>>(
    manager: &M,
    start_url: Url,
    navigation: NavigationObserver,
) -> tauri::Result<WebviewWindow<R>> {
    let script = stream_sniffer_script();

    WebviewWindowBuilder::new(manager, BROWSER_WINDOW_LABEL, WebviewUrl::External(start_url))
        .title("browseCaster")
        .inner_size(1200.0, 800.0)
        .initialization_script_for_all_frames(&script)
        .on_navigation(move |url| navigation.observe(url))
        .on_page_load(|window, payload| {
            let loading = matches!(payload.event(), PageLoadEvent::Started);
            let _ = window.emit(
                LOCATION_CHANGED_EVENT,
                LocationChangedEvent {
                    url: payload.url().to_string(),
                    loading,
                },
            );
        })
        .build()
}
