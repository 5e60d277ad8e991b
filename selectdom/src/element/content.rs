use super::Element;

/// What an element holds: nothing, a run of text, or child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }

    /// Concatenated text of this content, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(s) => out.push_str(s),
            Self::Children(children) => {
                for child in children {
                    child.content.collect_text(out);
                }
            }
        }
    }

    /// Serialize to a markup string with element identity stripped.
    ///
    /// Two contents with the same tags, classes and text produce the same
    /// markup even when their element ids differ.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(s) => out.push_str(s),
            Self::Children(children) => {
                for child in children {
                    if child.is_text() {
                        child.content.write_markup(out);
                        continue;
                    }
                    out.push('<');
                    out.push_str(&child.tag);
                    if !child.classes.is_empty() {
                        out.push_str(" class=\"");
                        out.push_str(&child.classes.join(" "));
                        out.push('"');
                    }
                    out.push('>');
                    child.content.write_markup(out);
                    out.push_str("</");
                    out.push_str(&child.tag);
                    out.push('>');
                }
            }
        }
    }

    /// Deep copy with every element id regenerated.
    pub fn clone_fresh(&self) -> Self {
        match self {
            Self::Children(children) => {
                Self::Children(children.iter().map(Element::clone_fresh).collect())
            }
            other => other.clone(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Element>> for Content {
    fn from(children: Vec<Element>) -> Self {
        Self::Children(children)
    }
}
