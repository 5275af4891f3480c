//! Local persistence for the one user preference the site keeps.
//!
//! Web builds use `window.localStorage`; native builds keep a small JSON
//! settings file in the platform data directory. Both store the language
//! code under `preferredLanguage`.

use thiserror::Error;

use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "preferredLanguage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stored language, or `None` if nothing (or an unknown code) is stored.
pub fn load_language() -> Result<Option<Language>, StorageError> {
    Ok(backend::read(LANGUAGE_KEY)?.and_then(|code| Language::from_code(&code)))
}

pub fn save_language(language: Language) -> Result<(), StorageError> {
    backend::write(LANGUAGE_KEY, language.code())
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Access(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn read(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    pub(super) fn write(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::{SettingsFile, StorageError};

    fn settings() -> Result<SettingsFile, StorageError> {
        let dirs = directories::ProjectDirs::from("co", "NosFuimosDeFinca", "finca")
            .ok_or(StorageError::Unavailable)?;
        Ok(SettingsFile::at(dirs.data_dir().join("settings.json")))
    }

    pub(super) fn read(key: &str) -> Result<Option<String>, StorageError> {
        settings()?.read(key)
    }

    pub(super) fn write(key: &str, value: &str) -> Result<(), StorageError> {
        settings()?.write(key, value)
    }
}

/// Flat string map persisted as JSON.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl SettingsFile {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<std::collections::BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> SettingsFile {
        let dir = std::env::temp_dir().join(format!(
            "finca-settings-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        SettingsFile::at(dir.join("settings.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let file = scratch_file("missing");
        assert!(file.read(LANGUAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn write_then_read_back() {
        let file = scratch_file("roundtrip");
        file.write(LANGUAGE_KEY, "en").unwrap();
        file.write("other", "x").unwrap();
        assert_eq!(file.read(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(
            file.read(LANGUAGE_KEY)
                .unwrap()
                .and_then(|code| Language::from_code(&code)),
            Some(Language::En)
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = scratch_file("malformed");
        file.write(LANGUAGE_KEY, "es").unwrap();
        std::fs::write(&file.path, "not json").unwrap();
        assert!(matches!(file.read(LANGUAGE_KEY), Err(StorageError::Json(_))));
    }
}
