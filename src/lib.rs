//! # mdreader
//!
//! The non-visual core of a markdown document reader.
//!
//! This library extracts a document's heading structure into a table of
//! contents, finds keyword occurrences in its text, and keeps the reader's
//! small amount of persistent state (recent files and the light/dark theme)
//! in a settings file.
//!
//! ## Features
//!
//! - Build a table of contents tree from a flat heading list
//! - URL-safe anchor ids for headings
//! - Case-insensitive, overlapping keyword search with match navigation
//! - Bounded recent files list with case-insensitive de-duplication
//! - Persisted theme preference with change listeners
//!
//! ## Example
//!
//! ```rust
//! use mdreader::{parse_markdown, search};
//!
//! let markdown = r#"
//! ## Introduction
//! Some content here.
//!
//! ### Background
//! More details.
//!
//! ### Methodology
//! Research approach.
//! "#;
//!
//! let doc = parse_markdown(markdown);
//! let toc = doc.toc();
//! assert_eq!(toc.len(), 1);
//! assert_eq!(toc[0].children.len(), 2);
//! assert_eq!(toc[0].children[1].anchor_id, "methodology");
//!
//! let result = search(&doc.plain_text(), "re");
//! println!("{} matches", result.total_matches);
//! ```

/// Application state combining documents, recent files, theme and search.
pub mod app;

/// Settings document shared by the theme preference and recent files.
pub mod config;

pub mod error;

/// Document reading and HTML export.
pub mod files;

/// Parser module for markdown documents.
///
/// Provides heading extraction, table of contents construction and anchor ids.
pub mod parser;

/// Bounded recent files list.
pub mod recent;

/// Keyword search and match navigation.
pub mod search;

/// Theme preference.
pub mod theme;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::{Settings, SettingsStore};
pub use error::{Error, Result};
pub use parser::{Document, HeadingBlock, TocNode, build_toc, parse_file, parse_markdown};
pub use recent::RecentFiles;
pub use search::{SearchCursor, SearchResult, search};
pub use theme::{Theme, ThemeStore};
