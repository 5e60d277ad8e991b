//! A minimal host document: detached element trees, a live document arena,
//! selectors, click listeners, native select semantics, and a text renderer.

pub mod document;
pub mod element;
pub mod error;
pub mod event;
mod form;
pub mod hit;
pub mod render;
pub mod selector;
pub mod terminal;
pub mod text;
pub mod types;

pub use document::{Document, ROOT_ID};
pub use element::{Content, Element};
pub use error::{DomError, SelectorError};
pub use event::{ClickEvent, Handler, ListenerId, ListenerScope, MouseButton};
pub use hit::hit_test;
pub use render::{render_lines, Line};
pub use selector::Selector;
pub use terminal::{Row, Terminal};
pub use types::*;
