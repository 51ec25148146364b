//! Application state tying the reader's pieces together.
//!
//! Opening a document records it in the recent files list and builds its
//! table of contents; searches run against the open document's plain text.

use crate::config::SettingsStore;
use crate::error::Result;
use crate::files;
use crate::parser::{self, Document, TocNode};
use crate::recent::RecentFiles;
use crate::search::{SearchCursor, search};
use crate::theme::{Theme, ThemeStore};
use std::path::{Path, PathBuf};

/// The currently open document.
#[derive(Debug, Clone)]
pub struct OpenDocument {
    pub path: PathBuf,
    pub document: Document,
    pub toc: Vec<TocNode>,
    plain_text: String,
}

impl OpenDocument {
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Standalone HTML page for this document in `theme`.
    pub fn to_page(&self, theme: Theme) -> String {
        let title = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        files::standalone_page(&self.document.html(), &title, theme)
    }
}

pub struct App {
    pub recent: RecentFiles,
    pub theme: ThemeStore,
    pub search: SearchCursor,
    document: Option<OpenDocument>,
}

impl App {
    /// Create the app, loading recent files and the saved theme.
    pub fn new(store: SettingsStore) -> Self {
        let recent = RecentFiles::new(store.clone());
        let mut theme = ThemeStore::new(store);
        theme.load_saved();

        Self {
            recent,
            theme,
            search: SearchCursor::new(),
            document: None,
        }
    }

    /// Open a markdown file.
    ///
    /// The path is added to the recent files only if the read succeeds.
    pub fn open(&mut self, path: &Path) -> Result<&OpenDocument> {
        let content = files::read_document(path)?;
        self.recent.add(&path.to_string_lossy());

        let document = parser::parse_markdown(&content);
        let toc = document.toc();
        let plain_text = document.plain_text();
        self.search.clear();

        log::info!(
            "opened {} ({} headings)",
            path.display(),
            document.headings.len()
        );
        Ok(&*self.document.insert(OpenDocument {
            path: path.to_path_buf(),
            document,
            toc,
            plain_text,
        }))
    }

    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }

    /// Search the open document and select the first match.
    ///
    /// With no document open the result is empty.
    pub fn search(&mut self, keyword: &str) -> &SearchCursor {
        let content = self.document.as_ref().map_or("", |d| d.plain_text());
        let result = search(content, keyword);
        self.search.set_result(result);
        &self.search
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }
}
