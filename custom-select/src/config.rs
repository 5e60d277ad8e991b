//! Controller configuration.

use std::rc::Rc;

/// Callback run once per instance after it finishes initializing.
pub type AfterInit = Rc<dyn Fn()>;

/// Settings for one [`CustomSelect`](crate::CustomSelect).
///
/// Each controller gets its own copy; instances created by different
/// controllers never share configuration.
#[derive(Clone)]
pub struct Config {
    /// Hide the native control once the overlay exists.
    pub hide_select: bool,

    /// Initialize immediately in [`CustomSelect::new`](crate::CustomSelect::new).
    pub init: bool,

    /// Reserved. Accepted and stored but never consulted.
    pub multiple_select: bool,

    /// Close an open overlay when a click lands outside its host.
    pub hide_on_outside_click: bool,

    /// Called with no arguments after each instance is bound.
    /// Panics are not caught.
    pub after_init: Option<AfterInit>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_select: true,
            init: true,
            multiple_select: false,
            hide_on_outside_click: true,
            after_init: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("hide_select", &self.hide_select)
            .field("init", &self.init)
            .field("multiple_select", &self.multiple_select)
            .field("hide_on_outside_click", &self.hide_on_outside_click)
            .field("after_init", &self.after_init.as_ref().map(|_| "Fn()"))
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_select(mut self, hide: bool) -> Self {
        self.hide_select = hide;
        self
    }

    /// Set to false to defer initialization to an explicit `init` call.
    pub fn init(mut self, init: bool) -> Self {
        self.init = init;
        self
    }

    pub fn multiple_select(mut self, multiple: bool) -> Self {
        self.multiple_select = multiple;
        self
    }

    pub fn hide_on_outside_click(mut self, hide: bool) -> Self {
        self.hide_on_outside_click = hide;
        self
    }

    pub fn after_init(mut self, callback: impl Fn() + 'static) -> Self {
        self.after_init = Some(Rc::new(callback));
        self
    }
}
