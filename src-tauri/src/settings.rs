use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{PoisonError, RwLock},
};

pub const DEFAULT_HOME_URL: &str = "https://example.com";

/// Shell preferences. Detected streams are never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellSettings {
    pub home_url: String,
    pub show_only_manifests: bool,
    pub assume_live: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.into(),
            show_only_manifests: true,
            assume_live: false,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<ShellSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            ShellSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn shell(&self) -> ShellSettings {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_shell(&self, settings: ShellSettings) -> Result<()> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        self.persist(&settings)?;
        *guard = settings;
        Ok(())
    }

    fn persist(&self, data: &ShellSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("browsecaster-{name}-{nanos}.json"))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = SettingsStore::new(scratch_path("missing")).unwrap();
        assert_eq!(store.shell(), ShellSettings::default());
        assert!(store.shell().show_only_manifests);
    }

    #[test]
    fn updates_round_trip_through_disk() {
        let path = scratch_path("roundtrip");
        let store = SettingsStore::new(path.clone()).unwrap();
        let updated = ShellSettings {
            home_url: "https://video.example".into(),
            show_only_manifests: false,
            assume_live: true,
        };

        store.update_shell(updated.clone()).unwrap();
        let reopened = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(reopened.shell(), updated);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn partial_or_corrupt_files_fall_back() {
        let path = scratch_path("partial");
        fs::write(&path, r#"{ "assumeLive": true }"#).unwrap();
        let store = SettingsStore::new(path.clone()).unwrap();
        assert!(store.shell().assume_live);
        assert_eq!(store.shell().home_url, DEFAULT_HOME_URL);

        fs::write(&path, "not json").unwrap();
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.shell(), ShellSettings::default());

        let _ = fs::remove_file(path);
    }
}
