use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Display;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag used for bare text nodes.
pub const TEXT_TAG: &str = "#text";

/// A detached element tree.
///
/// Elements are plain values until they are mounted into a
/// [`Document`](crate::Document); the document then addresses them by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Structural markers
    pub classes: Vec<String>,

    /// Inline display override. `None` means the element's natural display.
    pub display: Option<Display>,

    // Attributes (`value`, `selected`, `disabled`, ...)
    pub attrs: HashMap<String, String>,

    // Custom data storage (`data-*`)
    pub data: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            content: Content::None,
            classes: Vec::new(),
            display: None,
            attrs: HashMap::new(),
            data: HashMap::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Self::new(TEXT_TAG)
        }
    }

    /// A native single-choice control.
    pub fn select() -> Self {
        Self::new("select")
    }

    /// A native option with a plain-text label.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option")
            .attr("value", value)
            .child(Self::text(label))
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markers
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Set or clear the boolean `selected` attribute.
    pub fn selected(self, selected: bool) -> Self {
        self.flag("selected", selected)
    }

    /// Set or clear the boolean `disabled` attribute.
    pub fn disabled(self, disabled: bool) -> Self {
        self.flag("disabled", disabled)
    }

    fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.attrs.insert(key.to_string(), String::new());
        } else {
            self.attrs.remove(key);
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Content
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(_) => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None | Content::Text(_) => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Deep copy with this element and every descendant given a new id.
    pub fn clone_fresh(&self) -> Self {
        let prefix = if self.is_text() { "text" } else { &self.tag };
        Self {
            id: generate_id(prefix),
            content: self.content.clone_fresh(),
            ..self.clone()
        }
    }
}
