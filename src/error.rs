use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by file access and settings persistence.
///
/// The pure algorithms (anchors, TOC, search) never fail and do not use this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file path cannot be empty")]
    EmptyPath,

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("failed to save settings: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
