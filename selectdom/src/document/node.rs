use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::types::Display;

/// A mounted element. Children are stored by id; the document owns them.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub tag: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub text: Option<String>,
    pub classes: Vec<String>,
    pub display: Option<Display>,
    pub attrs: HashMap<String, String>,
    pub data: HashMap<String, String>,
}

impl Node {
    /// Split an element into its node fields and its child elements.
    pub fn from_element(element: Element, parent: Option<String>) -> (Self, Vec<Element>) {
        let (text, children) = match element.content {
            Content::None => (None, Vec::new()),
            Content::Text(s) => (Some(s), Vec::new()),
            Content::Children(children) => (None, children),
        };
        let node = Self {
            tag: element.tag,
            parent,
            children: Vec::with_capacity(children.len()),
            text,
            classes: element.classes,
            display: element.display,
            attrs: element.attrs,
            data: element.data,
        };
        (node, children)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
