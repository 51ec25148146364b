//! Reading documents from disk and exporting rendered HTML.

use crate::error::{Error, Result};
use crate::theme::Theme;
use std::fs;
use std::path::Path;

/// Read a markdown document.
///
/// # Errors
///
/// - [`Error::EmptyPath`] for an empty or blank path
/// - [`Error::NotFound`] when nothing exists at `path`
/// - [`Error::Io`] for any other read failure
pub fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::EmptyPath);
    }
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    Ok(fs::read_to_string(path)?)
}

/// Write an HTML document to `path` exactly as given.
///
/// Missing parent directories are created.
pub fn export_html(html: &str, path: &Path) -> Result<()> {
    if html.is_empty() {
        return Err(Error::EmptyContent);
    }
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::EmptyPath);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html)?;
    log::debug!("exported {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Wrap an HTML fragment in a minimal standalone page for `theme`.
pub fn standalone_page(fragment: &str, title: &str, theme: Theme) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body class=\"{}\">\n{}</body>\n</html>\n",
        escape_text(title),
        theme.css_class(),
        fragment
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Hello\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        match read_document(&path) {
            Err(Error::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_empty_path() {
        assert!(matches!(read_document(Path::new("")), Err(Error::EmptyPath)));
        assert!(matches!(read_document(Path::new("  ")), Err(Error::EmptyPath)));
    }

    #[test]
    fn test_export_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("doc.html");
        let html = "<p>Ünïcode &amp; stuff</p>\r\n";

        export_html(html, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), html.as_bytes());
    }

    #[test]
    fn test_export_rejects_empty_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.html");

        assert!(matches!(export_html("", &path), Err(Error::EmptyContent)));
        assert!(matches!(export_html("<p/>", Path::new(" ")), Err(Error::EmptyPath)));
        assert!(!path.exists());
    }

    #[test]
    fn test_standalone_page() {
        let page = standalone_page("<h1>Hi</h1>\n", "a < b", Theme::Dark);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<body class=\"dark\">"));
        assert!(page.contains("<h1>Hi</h1>"));
        assert!(page.contains("<title>a &lt; b</title>"));
    }
}
