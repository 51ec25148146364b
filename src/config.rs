use crate::error::{Error, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The persisted settings document shared by the theme preference and the
/// recent files list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// Most recently opened first
    #[serde(default)]
    pub recent_files: Vec<String>,
}

/// Handle to the settings file on disk.
///
/// Holds no cached copy: every read goes to disk and every mutation is a
/// full read-modify-write of the document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the platform-specific settings path
    /// - macOS: ~/Library/Application Support/mdreader/settings.toml
    /// - Linux: ~/.config/mdreader/settings.toml
    /// - Windows: %APPDATA%/mdreader/settings.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdreader").join("settings.toml"))
    }

    /// Store at the platform-specific location.
    pub fn default_location() -> Result<Self> {
        Self::config_path().map(Self::new).ok_or(Error::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document strictly.
    ///
    /// Returns `Ok(None)` when the file does not exist and an error when it
    /// exists but cannot be read or parsed.
    pub fn read(&self) -> Result<Option<Settings>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(toml::from_str(&contents)?))
    }

    /// Read the document, falling back to defaults when it is missing or
    /// malformed.
    pub fn load(&self) -> Settings {
        match self.read() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!(
                    "ignoring unreadable settings at {}: {}",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Read the current document, apply `f`, and write the result back.
    ///
    /// Fields `f` does not touch keep their on-disk values. The write goes
    /// through a temp file in the same directory and is renamed into place.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<()> {
        let mut settings = self.load();
        f(&mut settings);
        self.write(&settings)
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let contents = toml::to_string_pretty(settings)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;

        log::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}
