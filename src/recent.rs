//! Bounded, most-recent-first list of opened files.

use crate::config::SettingsStore;

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Recently opened file paths, newest first, unique ignoring case.
///
/// Loaded from the settings document on construction and written back after
/// every [`RecentFiles::add`].
pub struct RecentFiles {
    store: SettingsStore,
    entries: Vec<String>,
}

impl RecentFiles {
    /// Create the list and load the persisted entries.
    pub fn new(store: SettingsStore) -> Self {
        let mut recent = Self {
            store,
            entries: Vec::new(),
        };
        recent.load();
        recent
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing or malformed document yields an empty list.
    pub fn load(&mut self) {
        self.entries = self.store.load().recent_files;
        self.entries.truncate(MAX_RECENT_FILES);
        log::debug!("loaded {} recent files", self.entries.len());
    }

    /// Move `path` to the front, evicting the oldest entry past the limit.
    ///
    /// Blank paths are ignored. Save failures are logged and leave the
    /// in-memory list updated.
    pub fn add(&mut self, path: &str) {
        if path.trim().is_empty() {
            return;
        }

        let folded = path.to_lowercase();
        self.entries.retain(|entry| entry.to_lowercase() != folded);
        self.entries.insert(0, path.to_string());
        self.entries.truncate(MAX_RECENT_FILES);

        let entries = self.entries.clone();
        if let Err(e) = self.store.update(|s| s.recent_files = entries) {
            log::warn!("failed to save recent files: {}", e);
        }
    }

    pub fn list(&self) -> &[String] {
        &self.entries
    }
}
