//! Read-only snapshot of a native control's choices.

use selectdom::{Content, Document};

use crate::error::{Error, Result};

/// One selectable choice, captured at init and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Rich label content, copied from the native option.
    pub label: Content,
    pub value: String,
    pub disabled: bool,
    /// Whether the native control had this option selected at capture time.
    pub selected: bool,
}

/// The options of one native control, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSnapshot {
    /// Id of the native control the snapshot was taken from.
    pub native: String,
    pub options: Vec<SelectOption>,
    /// Index of the selected option, if the control has one.
    pub selected: Option<usize>,
}

/// First `select` inside `host`.
pub fn find_native(doc: &Document, host: &str) -> Result<String> {
    doc.find_descendant(host, "select")
        .ok_or_else(|| Error::MissingNativeControl {
            host: host.to_string(),
        })
}

/// Capture the options of the native control inside `host`.
///
/// Reads only; fails without touching the document when `host` has no
/// native control.
pub fn capture(doc: &Document, host: &str) -> Result<OptionSnapshot> {
    let native = find_native(doc, host)?;
    let selected = doc.selected_index(&native);

    let options = doc
        .select_options(&native)
        .iter()
        .enumerate()
        .map(|(i, id)| SelectOption {
            label: doc.inner(id).unwrap_or_default(),
            value: doc.option_value(id).unwrap_or_default(),
            disabled: doc.is_option_disabled(id),
            selected: selected == Some(i),
        })
        .collect::<Vec<_>>();

    log::trace!(
        "[mirror] {host}: {} options, selected {selected:?}",
        options.len()
    );

    Ok(OptionSnapshot {
        native,
        options,
        selected,
    })
}

#[cfg(test)]
mod tests {
    use selectdom::Element;

    use super::*;

    #[test]
    fn capture_keeps_document_order_and_flags() {
        let doc = Document::with_body([Element::div().id("host").child(
            Element::select().children([
                Element::option("z", "Zebra"),
                Element::option("a", "Ant").disabled(true),
                Element::option("m", "Moose").selected(true),
            ]),
        )])
        .unwrap();

        let snapshot = capture(&doc, "host").unwrap();
        let values: Vec<_> = snapshot.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["z", "a", "m"]);
        assert_eq!(snapshot.selected, Some(2));
        assert!(snapshot.options[1].disabled);
        assert!(snapshot.options[2].selected);
        assert!(!snapshot.options[0].selected);
        assert_eq!(snapshot.options[0].label.text(), "Zebra");
    }

    #[test]
    fn capture_without_native_control_fails() {
        let doc = Document::with_body([Element::div().id("host")]).unwrap();
        assert_eq!(
            capture(&doc, "host"),
            Err(Error::MissingNativeControl {
                host: "host".into()
            })
        );
    }
}
