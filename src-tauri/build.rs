// Every command here gets an `allow-<command>` permission that the files in
// `capabilities/` can grant. Keep the list in sync with `generate_handler!`.
const APP_COMMANDS: &[&str] = &[
    "record_stream_hit",
    "visible_candidates",
    "clear_candidates",
    "cast_candidate",
    "get_cast_status",
    "navigate",
    "go_back",
    "go_forward",
    "reload",
    "get_shell_settings",
    "set_shell_settings",
];

fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(APP_COMMANDS)),
    )
    .expect("failed to run tauri build script");
}
