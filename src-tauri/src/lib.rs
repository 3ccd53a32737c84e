mod browser;
mod cast;
mod observer;
mod settings;
mod settings_commands;
mod streams;
mod utils;

pub use cast::{CastController, CastRequest, CastSession, CastStatus, SessionEvent, StreamType};
pub use observer::{stream_sniffer_script, Hit, HitMessage, HitSink};
pub use streams::{
    classify, score, CandidateRegistry, RecordOutcome, StreamCandidate, StreamKind,
};

use std::sync::Arc;

use browser::{
    commands::{go_back, go_forward, navigate, reload},
    normalize_address, open_browser_window,
};
use cast::{
    commands::{cast_candidate, get_cast_status},
    DisconnectedCastSession, CAST_STATUS_EVENT,
};
use log::warn;
use observer::NavigationObserver;
use settings::{SettingsStore, DEFAULT_HOME_URL};
use settings_commands::{get_shell_settings, set_shell_settings};
use streams::{
    commands::{clear_candidates, record_stream_hit, visible_candidates},
    StreamsNotifier, STREAMS_CHANGED_EVENT,
};
use tauri::{Emitter, Manager};
use url::Url;

pub(crate) struct AppState {
    pub(crate) streams: Arc<CandidateRegistry>,
    pub(crate) cast: CastController,
    pub(crate) settings: SettingsStore,
    #[allow(dead_code)]
    notifier: StreamsNotifier,
}

fn start_url(configured: &str) -> anyhow::Result<Url> {
    match normalize_address(configured) {
        Ok(url) => Ok(url),
        Err(err) => {
            warn!("Ignoring home URL {configured:?}: {err}");
            Ok(Url::parse(DEFAULT_HOME_URL)?)
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // RUST_LOG wins; BROWSECASTER_DEBUG=1 only lowers the default.
    let debug_mode = std::env::var("BROWSECASTER_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    env_logger::Builder::new()
        .filter_level(if debug_mode {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("browseCaster starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_store = SettingsStore::new(app_data_dir.join("settings.json"))?;
                let home = start_url(&settings_store.shell().home_url)?;

                let streams = Arc::new(CandidateRegistry::new());

                let streams_handle = app.handle().clone();
                let notifier = StreamsNotifier::start(Arc::clone(&streams), move |change| {
                    let _ = streams_handle.emit(STREAMS_CHANGED_EVENT, change);
                });

                let cast = CastController::new(Arc::new(DisconnectedCastSession));
                {
                    let cast = cast.clone();
                    tauri::async_runtime::spawn(async move {
                        cast.follow_session_events().await;
                    });
                }
                {
                    let mut status_rx = cast.subscribe();
                    let cast_handle = app.handle().clone();
                    tauri::async_runtime::spawn(async move {
                        while status_rx.changed().await.is_ok() {
                            let status = status_rx.borrow_and_update().clone();
                            let _ = cast_handle.emit(CAST_STATUS_EVENT, status);
                        }
                    });
                }

                open_browser_window(app, home, NavigationObserver::new(streams.clone()))?;

                app.manage(AppState {
                    streams,
                    cast,
                    settings: settings_store,
                    notifier,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            record_stream_hit,
            visible_candidates,
            clear_candidates,
            cast_candidate,
            get_cast_status,
            navigate,
            go_back,
            go_forward,
            reload,
            get_shell_settings,
            set_shell_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
