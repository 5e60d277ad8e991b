//! Construction of the overlay element tree.
//!
//! Building is pure: it returns a detached [`Element`] tree plus the ids of
//! the nodes the controller needs later. Nothing is mounted and no listener
//! is attached here.

use selectdom::{Content, Display, Element};

use crate::options::SelectOption;

/// Class names the overlay and its host carry.
pub mod class {
    /// Wrapper holding placeholder and list.
    pub const SELECT: &str = "custom-select-select";
    pub const PLACEHOLDER: &str = "custom-select-placeholder";
    pub const OPTIONS: &str = "custom-select-options";
    pub const OPTION: &str = "custom-select-option";
    pub const SELECTED: &str = "selected";
    pub const DISABLED: &str = "disabled";
    /// On the options list while open.
    pub const TOGGLED: &str = "toggled";
    /// On the host while open.
    pub const OPTIONS_TOGGLED: &str = "options-toggled";
    /// On the host while an instance is bound to it.
    pub const INITIALIZED: &str = "custom-select-initialized";
}

/// Data key holding an option node's underlying value.
pub const VALUE_KEY: &str = "value";

/// A built, unmounted overlay.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// The wrapper tree, ready to be appended to the host.
    pub element: Element,
    pub placeholder: String,
    pub list: String,
    /// One id per option, in option order.
    pub options: Vec<String>,
}

impl Overlay {
    /// Ids only, for the instance to keep once the tree is mounted.
    pub fn nodes(&self) -> OverlayNodes {
        OverlayNodes {
            root: self.element.id.clone(),
            placeholder: self.placeholder.clone(),
            list: self.list.clone(),
            options: self.options.clone(),
        }
    }
}

/// Ids of a mounted overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayNodes {
    pub root: String,
    pub placeholder: String,
    pub list: String,
    pub options: Vec<String>,
}

/// Build the overlay for `options` with `selected` shown in the placeholder.
///
/// The list always starts hidden; open/closed state is applied afterwards by
/// the interaction state, never here.
pub fn build(options: &[SelectOption], selected: Option<usize>) -> Overlay {
    let option_elements: Vec<Element> = options.iter().map(option_element).collect();
    let option_ids = option_elements.iter().map(|e| e.id.clone()).collect();

    let placeholder_content = selected
        .and_then(|i| options.get(i))
        .map(|o| o.label.clone_fresh())
        .unwrap_or(Content::None);
    let placeholder = Element::div()
        .class(class::PLACEHOLDER)
        .content(placeholder_content);

    let list = Element::div()
        .class(class::OPTIONS)
        .display(Display::Hidden)
        .children(option_elements);

    let placeholder_id = placeholder.id.clone();
    let list_id = list.id.clone();

    Overlay {
        element: Element::div()
            .class(class::SELECT)
            .child(placeholder)
            .child(list),
        placeholder: placeholder_id,
        list: list_id,
        options: option_ids,
    }
}

fn option_element(option: &SelectOption) -> Element {
    let mut element = Element::div()
        .class(class::OPTION)
        .data(VALUE_KEY, option.value.clone())
        .content(option.label.clone_fresh());
    if option.selected {
        element = element.class(class::SELECTED);
    }
    if option.disabled {
        element = element.class(class::DISABLED);
    }
    element
}

#[cfg(test)]
mod tests {
    use selectdom::element::find_element;

    use super::*;

    fn opt(value: &str, selected: bool, disabled: bool) -> SelectOption {
        SelectOption {
            label: Content::Children(vec![
                Element::new("b").child(Element::text(value.to_uppercase())),
            ]),
            value: value.to_string(),
            disabled,
            selected,
        }
    }

    #[test]
    fn build_marks_flags_and_values() {
        let options = [opt("a", false, false), opt("b", true, false), opt("c", false, true)];
        let overlay = build(&options, Some(1));

        assert_eq!(overlay.options.len(), 3);
        let b = find_element(&overlay.element, &overlay.options[1]).unwrap();
        assert!(b.has_class(class::OPTION));
        assert!(b.has_class(class::SELECTED));
        assert_eq!(b.get_data(VALUE_KEY).map(String::as_str), Some("b"));

        let c = find_element(&overlay.element, &overlay.options[2]).unwrap();
        assert!(c.has_class(class::DISABLED));
        assert!(!c.has_class(class::SELECTED));
    }

    #[test]
    fn build_fills_placeholder_and_hides_list() {
        let options = [opt("a", false, false), opt("b", true, false)];
        let overlay = build(&options, Some(1));

        let placeholder = find_element(&overlay.element, &overlay.placeholder).unwrap();
        assert_eq!(placeholder.content.markup(), "<b>B</b>");
        assert_eq!(placeholder.content.markup(), options[1].label.markup());

        let list = find_element(&overlay.element, &overlay.list).unwrap();
        assert_eq!(list.display, Some(Display::Hidden));
        assert!(overlay.element.has_class(class::SELECT));
    }

    #[test]
    fn build_without_selection_leaves_placeholder_empty() {
        let overlay = build(&[], None);
        let placeholder = find_element(&overlay.element, &overlay.placeholder).unwrap();
        assert!(placeholder.content.is_empty());
        assert!(overlay.options.is_empty());
    }

    #[test]
    fn build_twice_gives_independent_trees() {
        let options = [opt("a", true, false)];
        let first = build(&options, Some(0));
        let second = build(&options, Some(0));
        assert_ne!(first.element.id, second.element.id);
        assert_ne!(first.options, second.options);
    }
}
