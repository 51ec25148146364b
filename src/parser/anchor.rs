//! Anchor id generation for headings.

use regex::Regex;
use std::sync::OnceLock;

/// Generate a URL-safe anchor id from heading text.
///
/// Lowercases the title, turns spaces into hyphens, drops everything outside
/// `[a-z0-9-]`, collapses hyphen runs and trims hyphens from both ends.
/// Duplicate titles produce duplicate ids; no suffixes are added.
///
/// # Examples
///
/// ```
/// # use mdreader::parser::anchor::anchor_id;
/// assert_eq!(anchor_id("Hello World"), "hello-world");
/// assert_eq!(anchor_id("What's New? (2024)"), "whats-new-2024");
/// assert_eq!(anchor_id("   "), "");
/// ```
pub fn anchor_id(title: &str) -> String {
    static SPECIAL: OnceLock<Regex> = OnceLock::new();
    static HYPHENS: OnceLock<Regex> = OnceLock::new();

    if title.trim().is_empty() {
        return String::new();
    }

    let special = SPECIAL.get_or_init(|| Regex::new(r"[^a-z0-9\-]").unwrap());
    let hyphens = HYPHENS.get_or_init(|| Regex::new(r"-{2,}").unwrap());

    let id = title.to_lowercase().replace(' ', "-");
    let id = special.replace_all(&id, "");
    let id = hyphens.replace_all(&id, "-");
    id.trim_matches('-').to_string()
}
