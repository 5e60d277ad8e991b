//! A small selector engine: tags, `#id`, `.class`, `[attr]`, `[attr=value]`,
//! descendant combinators, and comma-separated groups.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::error::SelectorError;

static COMPOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(\*|[A-Za-z][\w-]*)?((?:#[\w-]+|\.[\w-]+|\[[\w-]+(?:=(?:"[^"]*"|[\w-]+))?\])*)$"#,
    )
    .expect("compound selector pattern")
});

static PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#([\w-]+)|\.([\w-]+)|\[([\w-]+)(?:=(?:"([^"]*)"|([\w-]+)))?\]"#)
        .expect("selector part pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(selector: &str, part: &str) -> Result<Self, SelectorError> {
        let invalid = || SelectorError::Invalid {
            selector: selector.to_string(),
            part: part.to_string(),
        };
        let caps = COMPOUND.captures(part).ok_or_else(invalid)?;

        let mut compound = Compound {
            tag: caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|t| *t != "*")
                .map(str::to_ascii_lowercase),
            ..Default::default()
        };

        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        for part in PART.captures_iter(rest) {
            if let Some(id) = part.get(1) {
                compound.id = Some(id.as_str().to_string());
            } else if let Some(class) = part.get(2) {
                compound.classes.push(class.as_str().to_string());
            } else if let Some(key) = part.get(3) {
                let value = part.get(4).or_else(|| part.get(5));
                compound
                    .attrs
                    .push((key.as_str().to_string(), value.map(|v| v.as_str().to_string())));
            }
        }
        Ok(compound)
    }

    fn matches(&self, doc: &Document, id: &str) -> bool {
        let Some(node) = doc.node(id) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if self.id.as_deref().is_some_and(|want| want != id) {
            return false;
        }
        if !self.classes.iter().all(|c| node.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|(key, value)| {
            let actual = match key.strip_prefix("data-") {
                Some(data_key) => node.data.get(data_key).or_else(|| node.attrs.get(key)),
                None => node.attrs.get(key),
            };
            match (actual, value) {
                (Some(actual), Some(want)) => actual == want,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

/// A parsed selector, reusable across queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Comma-separated alternatives, each a chain of descendant compounds.
    groups: Vec<Vec<Compound>>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut groups = Vec::new();
        for group in trimmed.split(',') {
            let chain = group
                .split_whitespace()
                .map(|part| Compound::parse(selector, part))
                .collect::<Result<Vec<_>, _>>()?;
            if chain.is_empty() {
                return Err(SelectorError::Invalid {
                    selector: selector.to_string(),
                    part: group.to_string(),
                });
            }
            groups.push(chain);
        }
        Ok(Self { groups })
    }

    /// True when the element at `id` matches any group.
    pub fn matches(&self, doc: &Document, id: &str) -> bool {
        self.groups.iter().any(|chain| chain_matches(chain, doc, id))
    }
}

/// Match right-to-left: the last compound against the element, the rest
/// against its ancestors in order.
fn chain_matches(chain: &[Compound], doc: &Document, id: &str) -> bool {
    let Some((last, rest)) = chain.split_last() else {
        return false;
    };
    if !last.matches(doc, id) {
        return false;
    }

    let ancestors = doc.ancestors(id);
    let mut ancestors = ancestors.iter();
    rest.iter()
        .rev()
        .all(|compound| ancestors.any(|a| compound.matches(doc, a)))
}

impl Document {
    /// Every element matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<String>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select(&selector))
    }

    /// First element matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<String>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Every element matching an already-parsed selector, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<String> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| selector.matches(self, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(Selector::parse("div > p").is_err());
        assert!(Selector::parse("a:hover").is_err());
        assert!(Selector::parse(".a,").is_err());
    }

    #[test]
    fn parse_compound_parts() {
        let sel = Selector::parse(r#"div#main.a.b[data-x="one"]"#).unwrap();
        let compound = &sel.groups[0][0];
        assert_eq!(compound.tag.as_deref(), Some("div"));
        assert_eq!(compound.id.as_deref(), Some("main"));
        assert_eq!(compound.classes, vec!["a", "b"]);
        assert_eq!(
            compound.attrs,
            vec![("data-x".to_string(), Some("one".to_string()))]
        );
    }
}
