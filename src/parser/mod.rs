//! Markdown parsing and document structure extraction.
//!
//! This module adapts `pulldown-cmark` into the shapes the reader needs:
//! a flat list of headings with plain-text titles, the document's plain text
//! for keyword search, and an HTML fragment for display or export.

pub mod anchor;
pub mod toc;

pub use anchor::anchor_id;
pub use toc::{TocNode, build_toc, flatten};

use crate::error::Result;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A heading as produced by the markdown engine.
///
/// `title` is the literal text of the heading's inline content, with
/// emphasis, code and link markup reduced to their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingBlock {
    pub level: usize,
    pub title: String,
}

/// A parsed markdown document.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub headings: Vec<HeadingBlock>,
}

impl Document {
    pub fn new(content: String, headings: Vec<HeadingBlock>) -> Self {
        Self { content, headings }
    }

    /// Build the table of contents forest for this document.
    pub fn toc(&self) -> Vec<TocNode> {
        build_toc(&self.headings)
    }

    /// Plain text rendition used for keyword search.
    pub fn plain_text(&self) -> String {
        to_plain_text(&self.content)
    }

    /// HTML fragment for this document.
    pub fn html(&self) -> String {
        to_html(&self.content)
    }
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_MATH
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Parse a markdown file and extract its structure.
///
/// # Errors
///
/// Returns an error if the path is empty, the file does not exist, or it
/// cannot be read.
pub fn parse_file(path: &Path) -> Result<Document> {
    let content = crate::files::read_document(path)?;
    Ok(parse_markdown(&content))
}

/// Parse markdown content and extract its top-level headings.
///
/// Headings nested in block quotes, lists or footnote definitions are not
/// part of the outline. Math spans are left out of titles; image alt text
/// is kept.
pub fn parse_markdown(content: &str) -> Document {
    let mut headings = Vec::new();
    let mut current: Option<HeadingBlock> = None;
    let mut container_depth = 0usize;

    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Start(
                Tag::BlockQuote(_) | Tag::List(_) | Tag::Item | Tag::FootnoteDefinition(_),
            ) => container_depth += 1,
            Event::End(
                TagEnd::BlockQuote(_) | TagEnd::List(_) | TagEnd::Item | TagEnd::FootnoteDefinition,
            ) => container_depth = container_depth.saturating_sub(1),
            Event::Start(Tag::Heading { level, .. }) if container_depth == 0 => {
                current = Some(HeadingBlock {
                    level: level as usize,
                    title: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    Document::new(content.to_string(), headings)
}

/// Convert markdown to plain text.
///
/// Inline markup is dropped; block ends become line breaks. Math source is
/// kept so formulas stay searchable.
pub fn to_plain_text(markdown: &str) -> String {
    let mut out = String::new();

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(text)
            | Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::TableCell) => out.push('\t'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::CodeBlock
                | TagEnd::Item
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    out
}

/// Convert markdown to an HTML fragment.
///
/// Headings without an explicit id get their anchor id, so links built from
/// the table of contents resolve in the rendered page.
pub fn to_html(markdown: &str) -> String {
    let mut events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    let mut open: Option<usize> = None;
    let mut title = String::new();

    for i in 0..events.len() {
        if matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            open = Some(i);
            title.clear();
        } else if let Event::Text(text) | Event::Code(text) = &events[i] {
            if open.is_some() {
                title.push_str(text);
            }
        } else if matches!(events[i], Event::End(TagEnd::Heading(_)))
            && let Some(start) = open.take()
        {
            let anchor = anchor_id(&title);
            if !anchor.is_empty()
                && let Event::Start(Tag::Heading { id, .. }) = &mut events[start]
            {
                *id = Some(CowStr::from(anchor));
            }
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}
