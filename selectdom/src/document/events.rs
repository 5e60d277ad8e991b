//! Listener registration and click dispatch.

use std::collections::HashSet;
use std::rc::Rc;

use super::Document;
use crate::error::DomError;
use crate::event::{ClickEvent, Handler, Listener, ListenerId, ListenerScope, MouseButton};

impl Document {
    /// Register a click listener. The returned handle removes it again.
    pub fn add_listener<F>(&mut self, scope: ListenerScope, handler: F) -> ListenerId
    where
        F: Fn(&mut Document, &ClickEvent) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        log::trace!("[dom] add {id} on {scope:?}");
        self.listeners.push(Listener {
            id,
            scope,
            handler: Rc::new(handler),
        });
        id
    }

    /// Remove a listener by handle. Returns false if it was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        let removed = self.listeners.len() != before;
        log::trace!("[dom] remove {id}: {removed}");
        removed
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Number of registered listeners across all scopes.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of document-scoped listeners.
    pub fn document_listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.scope == ListenerScope::Document)
            .count()
    }

    pub(super) fn drop_listeners_for(&mut self, removed: &HashSet<String>) {
        self.listeners.retain(|l| match &l.scope {
            ListenerScope::Element(id) => !removed.contains(id),
            ListenerScope::Document => true,
        });
    }

    /// Deliver a left click to `target`.
    pub fn click(&mut self, target: &str) -> Result<usize, DomError> {
        self.dispatch(target, MouseButton::Left)
    }

    /// Deliver a click to `target`, bubbling through its ancestors and then
    /// to document listeners. Returns the number of listeners invoked.
    ///
    /// The listener list is snapshotted before dispatch; listeners removed by
    /// an earlier handler in the same dispatch are skipped.
    pub fn dispatch(&mut self, target: &str, button: MouseButton) -> Result<usize, DomError> {
        if !self.exists(target) {
            return Err(DomError::UnknownNode(target.to_string()));
        }

        let mut path = vec![target.to_string()];
        path.extend(self.ancestors(target));

        let mut queue: Vec<(ListenerId, Option<String>, Handler)> = Vec::new();
        for node in &path {
            for listener in &self.listeners {
                if let ListenerScope::Element(scope) = &listener.scope {
                    if scope == node {
                        queue.push((listener.id, Some(node.clone()), Rc::clone(&listener.handler)));
                    }
                }
            }
        }
        for listener in &self.listeners {
            if listener.scope == ListenerScope::Document {
                queue.push((listener.id, None, Rc::clone(&listener.handler)));
            }
        }

        log::trace!("[dom] click on {target}: {} listeners", queue.len());

        let mut invoked = 0;
        for (id, current_target, handler) in queue {
            if !self.has_listener(id) {
                continue;
            }
            let event = ClickEvent {
                target: target.to_string(),
                current_target,
                button,
            };
            handler(self, &event);
            invoked += 1;
        }
        Ok(invoked)
    }
}
