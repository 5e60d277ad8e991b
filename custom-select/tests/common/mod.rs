#![allow(dead_code)]

use custom_select::overlay::class;
use custom_select::{CustomSelect, Instance};
use selectdom::{Document, Element, ROOT_ID};

/// A host with a native control offering Red/Green/Blue, Green selected.
pub fn rgb_host(id: &str) -> Element {
    Element::div().id(id).class("custom-select").child(
        Element::select().id(format!("{id}-native")).children([
            Element::option("red", "Red"),
            Element::option("green", "Green").selected(true),
            Element::option("blue", "Blue"),
        ]),
    )
}

/// A host whose middle option is disabled and whose labels carry markup.
pub fn rich_host(id: &str) -> Element {
    Element::div().id(id).class("custom-select").child(
        Element::select().id(format!("{id}-native")).children([
            Element::new("option")
                .attr("value", "s")
                .child(Element::new("b").child(Element::text("S")))
                .child(Element::text("mall")),
            Element::option("m", "Medium").disabled(true),
            Element::new("option")
                .attr("value", "l")
                .child(Element::new("i").child(Element::text("Large"))),
        ]),
    )
}

/// Hosts with the given ids plus an unrelated sibling used for outside clicks.
pub fn doc_with(hosts: impl IntoIterator<Item = Element>) -> Document {
    let mut doc = Document::with_body(hosts).unwrap();
    doc.append(
        ROOT_ID,
        Element::div().id("elsewhere").child(Element::text("elsewhere")),
    )
    .unwrap();
    doc
}

pub fn instance<'a>(select: &'a CustomSelect, host: &str) -> std::cell::Ref<'a, Instance> {
    select.instance(host).expect("instance bound to host")
}

/// Option node ids of the instance on `host`.
pub fn option_nodes(select: &CustomSelect, host: &str) -> Vec<String> {
    instance(select, host).option_nodes().to_vec()
}

pub fn placeholder(select: &CustomSelect, host: &str) -> String {
    instance(select, host).placeholder().to_string()
}

/// Option nodes currently carrying the selected marker.
pub fn marked(doc: &Document, nodes: &[String]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| doc.has_class(n, class::SELECTED))
        .map(|(i, _)| i)
        .collect()
}

/// Whether the overlay list of `host` is showing.
pub fn list_shown(doc: &Document, select: &CustomSelect, host: &str) -> bool {
    let list = instance(select, host).overlay().list.clone();
    doc.is_displayed(&list)
}
