//! Table of contents construction.
//!
//! Turns the flat, document-ordered heading list into a forest where each
//! heading hangs under the nearest preceding heading of a lower level.

use super::HeadingBlock;
use super::anchor::anchor_id;
use serde::{Deserialize, Serialize};

/// A node in the table of contents tree.
///
/// Children are owned by their parent and always have a strictly greater
/// level than it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    pub title: String,
    pub level: usize,
    #[serde(rename = "anchorId")]
    pub anchor_id: String,
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        let title = title.into();
        let anchor_id = anchor_id(&title);
        Self {
            title,
            level,
            anchor_id,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TocNode::node_count).sum::<usize>()
    }

    /// Render this subtree with box-drawing characters.
    ///
    /// `prefix` is the indentation inherited from ancestors and `is_last`
    /// tells whether this node closes its sibling list.
    pub fn render_box_tree(&self, prefix: &str, is_last: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, prefix, is_last);
        out
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&"#".repeat(self.level));
        out.push(' ');
        out.push_str(&self.title);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.render_into(out, &child_prefix, i + 1 == count);
        }
    }
}

/// Build the heading forest from a flat heading list.
///
/// Single pass with a stack of open nodes ordered by increasing level. Open
/// nodes at the same or a deeper level than the incoming heading are closed
/// and attached to whatever is open beneath them, or become roots. Level
/// jumps are not normalized: an H4 right after an H1 is a direct child of it.
pub fn build_toc(headings: &[HeadingBlock]) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut open: Vec<TocNode> = Vec::new();

    for heading in headings {
        let node = TocNode::new(heading.title.clone(), heading.level);

        while open.last().is_some_and(|top| top.level >= node.level) {
            if let Some(done) = open.pop() {
                attach(&mut open, &mut roots, done);
            }
        }

        open.push(node);
    }

    while let Some(done) = open.pop() {
        attach(&mut open, &mut roots, done);
    }

    log::debug!(
        "built toc: {} headings, {} roots",
        headings.len(),
        roots.len()
    );
    roots
}

fn attach(open: &mut [TocNode], roots: &mut Vec<TocNode>, node: TocNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Flatten a forest in pre-order (document order).
pub fn flatten(forest: &[TocNode]) -> Vec<&TocNode> {
    fn walk<'a>(nodes: &'a [TocNode], out: &mut Vec<&'a TocNode>) {
        for node in nodes {
            out.push(node);
            walk(&node.children, out);
        }
    }

    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}
