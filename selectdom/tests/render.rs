use selectdom::{render_lines, Display, Document, Element, ROOT_ID};

fn texts(doc: &Document) -> Vec<String> {
    render_lines(doc, ROOT_ID)
        .into_iter()
        .map(|l| l.indented())
        .collect()
}

#[test]
fn test_inline_content_folds_into_one_row() {
    let doc = Document::with_body([Element::div().id("row").children([
        Element::text("Dark "),
        Element::new("b").child(Element::text("Blue")),
        Element::span().child(Element::text(" (new)")),
    ])])
    .unwrap();

    let lines = render_lines(&doc, ROOT_ID);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, "row");
    assert_eq!(lines[0].text, "Dark Blue (new)");
    assert_eq!(lines[0].depth, 1);
}

#[test]
fn test_blocks_nest_with_depth() {
    let doc = Document::with_body([Element::div()
        .child(Element::text("title"))
        .child(Element::div().child(Element::text("child")))])
    .unwrap();

    assert_eq!(texts(&doc), vec!["  title", "    child"]);
}

#[test]
fn test_hidden_subtrees_are_skipped() {
    let doc = Document::with_body([
        Element::div().child(Element::text("shown")),
        Element::div()
            .display(Display::Hidden)
            .child(Element::text("hidden")),
        Element::div().children([
            Element::text("a"),
            Element::span()
                .display(Display::Hidden)
                .child(Element::text("b")),
            Element::text("c"),
        ]),
    ])
    .unwrap();

    assert_eq!(texts(&doc), vec!["  shown", "  ac"]);
}

#[test]
fn test_display_inline_overrides_tag() {
    let doc = Document::with_body([Element::div().id("host").children([
        Element::div()
            .display(Display::Inline)
            .child(Element::text("one ")),
        Element::div()
            .display(Display::Inline)
            .child(Element::text("two")),
    ])])
    .unwrap();

    let lines = render_lines(&doc, ROOT_ID);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "one two");
}

#[test]
fn test_native_select_renders_selected_label() {
    let doc = Document::with_body([Element::select().id("sel").children([
        Element::option("r", "Red"),
        Element::option("g", "Green").selected(true),
    ])])
    .unwrap();

    let lines = render_lines(&doc, ROOT_ID);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, "sel");
    assert_eq!(lines[0].text, "[Green ▾]");
}
