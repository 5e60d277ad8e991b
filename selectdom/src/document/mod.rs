//! The live document: a mutable arena of mounted elements.

mod events;
mod node;

use std::collections::{HashMap, HashSet};

use crate::element::{Content, Element};
use crate::error::DomError;
use crate::event::Listener;
use crate::types::Display;

pub(crate) use node::Node;

/// Id of the root element every document starts with.
pub const ROOT_ID: &str = "root";

/// A mutable element tree addressed by element id.
///
/// Structural operations (`append`, `prepend`, `remove`, `set_inner`) return
/// [`DomError`] on bad ids. Marker and attribute setters are no-ops on
/// unknown ids and report whether anything changed.
#[derive(Debug)]
pub struct Document {
    root: String,
    nodes: HashMap<String, Node>,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only an empty `body` root.
    pub fn new() -> Self {
        let (root, _) = Node::from_element(Element::new("body"), None);
        let mut nodes = HashMap::new();
        nodes.insert(ROOT_ID.to_string(), root);
        Self {
            root: ROOT_ID.to_string(),
            nodes,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Create a document and append `children` to the root.
    pub fn with_body(children: impl IntoIterator<Item = Element>) -> Result<Self, DomError> {
        let mut doc = Self::new();
        for child in children {
            doc.append(ROOT_ID, child)?;
        }
        Ok(doc)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub(crate) fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn tag(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.tag.as_str())
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.parent.as_deref())
    }

    /// Child ids in order. Empty for unknown ids and text-only elements.
    pub fn children(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    // -------------------------------------------------------------------------
    // Tree mutation
    // -------------------------------------------------------------------------

    /// Mount `element` as the last child of `parent`. Returns its id.
    pub fn append(&mut self, parent: &str, element: Element) -> Result<String, DomError> {
        let index = self.children(parent).len();
        self.insert(parent, index, element)
    }

    /// Mount `element` as the first child of `parent`. Returns its id.
    pub fn prepend(&mut self, parent: &str, element: Element) -> Result<String, DomError> {
        self.insert(parent, 0, element)
    }

    fn insert(&mut self, parent: &str, index: usize, element: Element) -> Result<String, DomError> {
        if !self.nodes.contains_key(parent) {
            return Err(DomError::UnknownNode(parent.to_string()));
        }
        self.check_ids(&element, &HashSet::new())?;

        let id = self.mount(Some(parent.to_string()), element);
        if let Some(parent) = self.nodes.get_mut(parent) {
            // Text and children are exclusive.
            parent.text = None;
            let index = index.min(parent.children.len());
            parent.children.insert(index, id.clone());
        }
        Ok(id)
    }

    /// Reject trees whose ids collide with mounted nodes or with each other.
    ///
    /// Ids in `released` are about to be unmounted and may be reused.
    fn check_ids(&self, element: &Element, released: &HashSet<String>) -> Result<(), DomError> {
        fn walk<'a>(
            doc: &Document,
            element: &'a Element,
            released: &HashSet<String>,
            seen: &mut HashSet<&'a str>,
        ) -> Result<(), DomError> {
            let mounted = doc.nodes.contains_key(&element.id) && !released.contains(&element.id);
            if mounted || !seen.insert(element.id.as_str()) {
                return Err(DomError::DuplicateId(element.id.clone()));
            }
            if let Content::Children(children) = &element.content {
                for child in children {
                    walk(doc, child, released, seen)?;
                }
            }
            Ok(())
        }

        walk(self, element, released, &mut HashSet::new())
    }

    fn mount(&mut self, parent: Option<String>, element: Element) -> String {
        let id = element.id.clone();
        let (node, children) = Node::from_element(element, parent);
        self.nodes.insert(id.clone(), node);

        let child_ids: Vec<String> = children
            .into_iter()
            .map(|child| self.mount(Some(id.clone()), child))
            .collect();
        if let Some(node) = self.nodes.get_mut(&id) {
            node.children = child_ids;
        }
        id
    }

    /// Detach an element and its subtree. Returns the detached tree.
    ///
    /// Listeners scoped to any removed element are dropped with it.
    pub fn remove(&mut self, id: &str) -> Result<Element, DomError> {
        if id == self.root {
            return Err(DomError::RootRemoval);
        }
        let element = self
            .to_element(id)
            .ok_or_else(|| DomError::UnknownNode(id.to_string()))?;

        if let Some(parent) = self.parent(id).map(str::to_string) {
            if let Some(parent) = self.nodes.get_mut(&parent) {
                parent.children.retain(|c| c != id);
            }
        }
        self.drop_subtree(id);
        Ok(element)
    }

    fn drop_subtree(&mut self, id: &str) {
        let mut removed = HashSet::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
                removed.insert(current);
            }
        }
        self.drop_listeners_for(&removed);
    }

    /// Snapshot an element and its subtree as a detached tree.
    pub fn to_element(&self, id: &str) -> Option<Element> {
        let node = self.nodes.get(id)?;
        Some(Element {
            id: id.to_string(),
            tag: node.tag.clone(),
            content: self.content_of(node),
            classes: node.classes.clone(),
            display: node.display,
            attrs: node.attrs.clone(),
            data: node.data.clone(),
        })
    }

    fn content_of(&self, node: &Node) -> Content {
        if let Some(text) = &node.text {
            return Content::Text(text.clone());
        }
        if node.children.is_empty() {
            return Content::None;
        }
        Content::Children(
            node.children
                .iter()
                .filter_map(|c| self.to_element(c))
                .collect(),
        )
    }

    /// Snapshot of an element's content (its "inner markup").
    pub fn inner(&self, id: &str) -> Option<Content> {
        self.nodes.get(id).map(|n| self.content_of(n))
    }

    /// Replace an element's content. Existing children are removed.
    pub fn set_inner(&mut self, id: &str, content: Content) -> Result<(), DomError> {
        if !self.nodes.contains_key(id) {
            return Err(DomError::UnknownNode(id.to_string()));
        }
        if let Content::Children(children) = &content {
            let released: HashSet<String> = self.descendants(id).into_iter().collect();
            let fragment = Element::new("#fragment").children(children.iter().cloned());
            self.check_ids(&fragment, &released)?;
        }

        let old: Vec<String> = self.children(id).to_vec();
        for child in &old {
            self.drop_subtree(child);
        }

        let (text, children) = match content {
            Content::None => (None, Vec::new()),
            Content::Text(s) => (Some(s), Vec::new()),
            Content::Children(children) => (None, children),
        };
        let child_ids: Vec<String> = children
            .into_iter()
            .map(|child| self.mount(Some(id.to_string()), child))
            .collect();
        if let Some(node) = self.nodes.get_mut(id) {
            node.text = text;
            node.children = child_ids;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Tree inspection
    // -------------------------------------------------------------------------

    /// Concatenated text of an element's subtree.
    pub fn text_content(&self, id: &str) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: &str, out: &mut String) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Ancestor ids, nearest first. Does not include `id` itself.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            out.push(parent.to_string());
            current = self.parent(parent);
        }
        out
    }

    /// True when `id` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        if !self.exists(ancestor) || !self.exists(id) {
            return false;
        }
        id == ancestor || self.ancestors(id).iter().any(|a| a == ancestor)
    }

    /// Descendant ids in document order. Does not include `id` itself.
    pub fn descendants(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.walk(id, &mut out);
        out
    }

    fn walk(&self, id: &str, out: &mut Vec<String>) {
        for child in self.children(id) {
            out.push(child.clone());
            self.walk(child, out);
        }
    }

    /// First descendant with the given tag, in document order.
    pub fn find_descendant(&self, id: &str, tag: &str) -> Option<String> {
        self.descendants(id)
            .into_iter()
            .find(|d| self.tag(d) == Some(tag))
    }

    /// Every descendant with the given tag, in document order.
    pub fn descendants_by_tag(&self, id: &str, tag: &str) -> Vec<String> {
        self.descendants(id)
            .into_iter()
            .filter(|d| self.tag(d) == Some(tag))
            .collect()
    }

    /// First descendant carrying the given class, in document order.
    pub fn find_by_class(&self, id: &str, class: &str) -> Option<String> {
        self.descendants(id)
            .into_iter()
            .find(|d| self.has_class(d, class))
    }

    // -------------------------------------------------------------------------
    // Structural markers
    // -------------------------------------------------------------------------

    pub fn classes(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes.get(id).is_some_and(|n| n.has_class(class))
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) if !node.has_class(class) => {
                node.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        node.classes.len() != before
    }

    /// Flip a class. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class)
        }
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Inline display override of an element (`None` when unset or unknown).
    pub fn display(&self, id: &str) -> Option<Display> {
        self.nodes.get(id).and_then(|n| n.display)
    }

    pub fn set_display(&mut self, id: &str, display: Option<Display>) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.display = display;
                true
            }
            None => false,
        }
    }

    /// True when neither the element nor any ancestor is hidden.
    pub fn is_displayed(&self, id: &str) -> bool {
        if !self.exists(id) {
            return false;
        }
        std::iter::once(id.to_string())
            .chain(self.ancestors(id))
            .all(|a| !self.display(&a).is_some_and(Display::is_hidden))
    }

    // -------------------------------------------------------------------------
    // Attributes and data
    // -------------------------------------------------------------------------

    pub fn attr(&self, id: &str, key: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|n| n.attrs.get(key))
            .map(String::as_str)
    }

    pub fn has_attr(&self, id: &str, key: &str) -> bool {
        self.attr(id, key).is_some()
    }

    pub fn set_attr(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.attrs.insert(key.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    /// Returns true if the attribute was present.
    pub fn remove_attr(&mut self, id: &str, key: &str) -> bool {
        self.nodes
            .get_mut(id)
            .is_some_and(|n| n.attrs.remove(key).is_some())
    }

    pub fn data(&self, id: &str, key: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|n| n.data.get(key))
            .map(String::as_str)
    }

    pub fn set_data(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.data.insert(key.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    /// Returns true if the data key was present.
    pub fn remove_data(&mut self, id: &str, key: &str) -> bool {
        self.nodes
            .get_mut(id)
            .is_some_and(|n| n.data.remove(key).is_some())
    }
}
