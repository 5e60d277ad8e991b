use std::cell::RefCell;
use std::rc::Rc;

use selectdom::{
    hit_test, render_lines, Document, DomError, Element, ListenerId, ListenerScope, MouseButton,
    ROOT_ID,
};

fn nested_doc() -> Document {
    Document::with_body([Element::div().id("outer").child(
        Element::div()
            .id("inner")
            .child(Element::span().id("leaf").child(Element::text("x"))),
    )])
    .unwrap()
}

fn recorder() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_bubbles_to_ancestors_then_document() {
    let mut doc = nested_doc();
    let log = recorder();

    for scope in ["outer", "inner", "leaf"] {
        let log = Rc::clone(&log);
        doc.add_listener(ListenerScope::Element(scope.into()), move |_, ev| {
            log.borrow_mut()
                .push(format!("{}<-{}", ev.current_target.clone().unwrap(), ev.target));
        });
    }
    {
        let log = Rc::clone(&log);
        doc.add_listener(ListenerScope::Document, move |_, ev| {
            assert!(ev.current_target.is_none());
            log.borrow_mut().push(format!("doc<-{}", ev.target));
        });
    }

    assert_eq!(doc.click("leaf").unwrap(), 4);
    assert_eq!(
        *log.borrow(),
        vec!["leaf<-leaf", "inner<-leaf", "outer<-leaf", "doc<-leaf"]
    );

    log.borrow_mut().clear();
    assert_eq!(doc.click("outer").unwrap(), 2);
    assert_eq!(*log.borrow(), vec!["outer<-outer", "doc<-outer"]);
}

#[test]
fn test_click_unknown_target_is_an_error() {
    let mut doc = nested_doc();
    assert_eq!(
        doc.click("nope"),
        Err(DomError::UnknownNode("nope".to_string()))
    );
}

#[test]
fn test_dispatch_carries_button() {
    let mut doc = nested_doc();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    doc.add_listener(ListenerScope::Document, move |_, ev| {
        *sink.borrow_mut() = Some(ev.button);
    });

    doc.dispatch("leaf", MouseButton::Right).unwrap();
    assert_eq!(*seen.borrow(), Some(MouseButton::Right));
}

#[test]
fn test_handlers_can_mutate_the_document() {
    let mut doc = nested_doc();
    doc.add_listener(ListenerScope::Element("inner".into()), |doc, _| {
        doc.toggle_class("outer", "open");
    });

    doc.click("leaf").unwrap();
    assert!(doc.has_class("outer", "open"));
    doc.click("leaf").unwrap();
    assert!(!doc.has_class("outer", "open"));
}

// ============================================================================
// Listener lifecycle
// ============================================================================

#[test]
fn test_remove_listener_by_handle() {
    let mut doc = nested_doc();
    let count = Rc::new(RefCell::new(0));

    let c = Rc::clone(&count);
    let id = doc.add_listener(ListenerScope::Document, move |_, _| *c.borrow_mut() += 1);
    assert_eq!(doc.document_listener_count(), 1);

    doc.click("leaf").unwrap();
    assert!(doc.remove_listener(id));
    assert!(!doc.remove_listener(id));
    doc.click("leaf").unwrap();

    assert_eq!(*count.borrow(), 1);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_listener_removed_mid_dispatch_is_skipped() {
    let mut doc = nested_doc();
    let log = recorder();

    let l = Rc::clone(&log);
    let later = doc.add_listener(ListenerScope::Document, move |_, _| {
        l.borrow_mut().push("later".into());
    });
    let l = Rc::clone(&log);
    doc.add_listener(ListenerScope::Element("leaf".into()), move |doc, _| {
        l.borrow_mut().push("first".into());
        doc.remove_listener(later);
    });

    assert_eq!(doc.click("leaf").unwrap(), 1);
    assert_eq!(*log.borrow(), vec!["first"]);
}

#[test]
fn test_removing_an_element_drops_its_listeners() {
    let mut doc = nested_doc();
    let on_leaf = doc.add_listener(ListenerScope::Element("leaf".into()), |_, _| {});
    let on_doc = doc.add_listener(ListenerScope::Document, |_, _| {});

    doc.remove("inner").unwrap();

    assert!(!doc.has_listener(on_leaf));
    assert!(doc.has_listener(on_doc));
}

#[test]
fn test_listener_handles_survive_text_form() {
    let mut doc = nested_doc();
    let first = doc.add_listener(ListenerScope::Document, |_, _| {});
    let second = doc.add_listener(ListenerScope::Element("leaf".into()), |_, _| {});

    let stored = format!("{first} {second}");
    let parsed: Vec<ListenerId> = stored
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();

    assert_eq!(parsed, [first, second]);
    assert!(doc.remove_listener(parsed[0]));
    assert!("listener-x".parse::<ListenerId>().is_err());
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_rows() {
    let doc = Document::with_body([
        Element::div().id("a").child(Element::text("first")),
        Element::div().id("b").child(Element::text("second")),
    ])
    .unwrap();
    let lines = render_lines(&doc, ROOT_ID);

    assert_eq!(hit_test(&lines, 0, 0), Some("a".to_string()));
    assert_eq!(hit_test(&lines, 0, 1), Some("b".to_string()));
    assert_eq!(hit_test(&lines, 1, 0), Some("b".to_string()));
    assert_eq!(hit_test(&lines, 0, 5), None);
}
