//! Open/closed state of one overlay.

use selectdom::{Display, Document};

use crate::overlay::class;

/// Whether the options list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Two-state machine for one instance's options list.
///
/// Every transition is written to the document in lockstep: the host's
/// `options-toggled` marker, the list's `toggled` marker, and the list's
/// display flag always agree with [`state`](Self::state).
#[derive(Debug, Clone)]
pub struct InteractionState {
    state: OverlayState,
    host: String,
    list: String,
}

impl InteractionState {
    /// Starts closed. Call [`sync`](Self::sync) once the list is mounted.
    pub fn new(host: impl Into<String>, list: impl Into<String>) -> Self {
        Self {
            state: OverlayState::Closed,
            host: host.into(),
            list: list.into(),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Closed → Open, Open → Closed.
    pub fn toggle(&mut self, doc: &mut Document) -> OverlayState {
        self.state = match self.state {
            OverlayState::Closed => OverlayState::Open,
            OverlayState::Open => OverlayState::Closed,
        };
        log::trace!("[state] {} -> {:?}", self.host, self.state);
        self.sync(doc);
        self.state
    }

    /// Open → Closed. No-op when already closed.
    pub fn close(&mut self, doc: &mut Document) {
        if self.state == OverlayState::Closed {
            return;
        }
        self.state = OverlayState::Closed;
        log::trace!("[state] {} -> Closed", self.host);
        self.sync(doc);
    }

    /// Write the current state to the document.
    pub fn sync(&self, doc: &mut Document) {
        match self.state {
            OverlayState::Open => {
                doc.add_class(&self.host, class::OPTIONS_TOGGLED);
                doc.add_class(&self.list, class::TOGGLED);
                doc.set_display(&self.list, Some(Display::Block));
            }
            OverlayState::Closed => {
                doc.remove_class(&self.host, class::OPTIONS_TOGGLED);
                doc.remove_class(&self.list, class::TOGGLED);
                doc.set_display(&self.list, Some(Display::Hidden));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use selectdom::Element;

    use super::*;

    fn setup() -> (Document, InteractionState) {
        let doc = Document::with_body([Element::div()
            .id("host")
            .child(Element::div().id("list").display(Display::Hidden))])
        .unwrap();
        (doc, InteractionState::new("host", "list"))
    }

    fn observed(doc: &Document) -> (bool, bool, Option<Display>) {
        (
            doc.has_class("host", class::OPTIONS_TOGGLED),
            doc.has_class("list", class::TOGGLED),
            doc.display("list"),
        )
    }

    #[test]
    fn toggle_opens_and_marks_in_lockstep() {
        let (mut doc, mut state) = setup();
        assert_eq!(state.toggle(&mut doc), OverlayState::Open);
        assert_eq!(observed(&doc), (true, true, Some(Display::Block)));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let (mut doc, mut state) = setup();
        state.sync(&mut doc);
        let before = (state.state(), observed(&doc));

        state.toggle(&mut doc);
        state.toggle(&mut doc);
        assert_eq!((state.state(), observed(&doc)), before);

        state.toggle(&mut doc);
        let open = (state.state(), observed(&doc));
        state.toggle(&mut doc);
        state.toggle(&mut doc);
        assert_eq!((state.state(), observed(&doc)), open);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut doc, mut state) = setup();
        state.close(&mut doc);
        assert!(!state.is_open());
        assert_eq!(observed(&doc), (false, false, Some(Display::Hidden)));

        state.toggle(&mut doc);
        state.close(&mut doc);
        state.close(&mut doc);
        assert_eq!(state.state(), OverlayState::Closed);
        assert_eq!(observed(&doc), (false, false, Some(Display::Hidden)));
    }
}
