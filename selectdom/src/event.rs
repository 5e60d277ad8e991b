use std::rc::Rc;

use crate::document::Document;

/// A pointer activation delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// The deepest element that was clicked.
    pub target: String,
    /// The element the running listener is scoped to.
    /// `None` for document-scoped listeners.
    pub current_target: Option<String>,
    pub button: MouseButton,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Runs for clicks on this element or anything inside it.
    Element(String),
    /// Runs for every click in the document, after element listeners.
    Document,
}

/// Handle returned by [`Document::add_listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Parses the `listener-n` form produced by `Display`.
impl std::str::FromStr for ListenerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("listener-").unwrap_or(s).parse().map(Self)
    }
}

/// Click callback. Receives the document so it can mutate the tree.
pub type Handler = Rc<dyn Fn(&mut Document, &ClickEvent)>;

pub(crate) struct Listener {
    pub id: ListenerId,
    pub scope: ListenerScope,
    pub handler: Handler,
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
