//! Flatten a document into text rows for the terminal.
//!
//! Block elements start a new row; inline elements and text are folded into
//! the row of their nearest block ancestor. Hidden subtrees are skipped.

use crate::document::Document;
use crate::element::TEXT_TAG;
use crate::text::collapse_whitespace;
use crate::types::Display;

const INLINE_TAGS: &[&str] = &[TEXT_TAG, "b", "i", "em", "strong", "span", "small", "code"];

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Element the row belongs to. A click on the row targets it.
    pub id: String,
    pub depth: usize,
    pub text: String,
}

impl Line {
    /// Row text indented two columns per depth level.
    pub fn indented(&self) -> String {
        format!("{}{}", "  ".repeat(self.depth), self.text)
    }
}

/// Render the subtree at `root` into rows, top to bottom.
pub fn render_lines(doc: &Document, root: &str) -> Vec<Line> {
    let mut out = Vec::new();
    render_block(doc, root, 0, &mut out);
    log::trace!("[render] {} rows from {root}", out.len());
    out
}

fn is_hidden(doc: &Document, id: &str) -> bool {
    doc.display(id).is_some_and(Display::is_hidden)
}

fn is_inline(doc: &Document, id: &str) -> bool {
    match doc.display(id) {
        Some(Display::Inline) => true,
        Some(_) => false,
        None => doc.tag(id).is_some_and(|t| INLINE_TAGS.contains(&t)),
    }
}

fn render_block(doc: &Document, id: &str, depth: usize, out: &mut Vec<Line>) {
    if is_hidden(doc, id) {
        return;
    }

    if doc.tag(id) == Some("select") {
        // Native controls render as a single closed box.
        let options = doc.select_options(id);
        let label = doc
            .selected_index(id)
            .map(|i| collapse_whitespace(&doc.text_content(&options[i])))
            .unwrap_or_default();
        out.push(Line {
            id: id.to_string(),
            depth,
            text: format!("[{label} ▾]"),
        });
        return;
    }

    let mut run = String::new();
    for child in doc.children(id) {
        if is_inline(doc, child) {
            inline_text(doc, child, &mut run);
            continue;
        }
        flush(id, depth, &mut run, out);
        render_block(doc, child, depth + 1, out);
    }
    if let Some(node) = doc.node(id) {
        if let Some(text) = &node.text {
            run.push_str(text);
        }
    }
    flush(id, depth, &mut run, out);
}

fn inline_text(doc: &Document, id: &str, out: &mut String) {
    if is_hidden(doc, id) {
        return;
    }
    if let Some(node) = doc.node(id) {
        if let Some(text) = &node.text {
            out.push_str(text);
        }
    }
    for child in doc.children(id) {
        inline_text(doc, child, out);
    }
}

fn flush(id: &str, depth: usize, run: &mut String, out: &mut Vec<Line>) {
    let text = collapse_whitespace(run);
    run.clear();
    if !text.is_empty() {
        out.push(Line {
            id: id.to_string(),
            depth,
            text,
        });
    }
}
