//! One live binding between a host, its native control, and its overlay.
//!
//! The [`Instance`] is the only place where the overlay and the native
//! control are written together, so this is where they are kept consistent.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use selectdom::{ClickEvent, Display, Document, ListenerId, ListenerScope};
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;
use crate::options::{self, SelectOption};
use crate::overlay::{self, OverlayNodes, class};
use crate::state::{InteractionState, OverlayState};

/// Unique identifier for a bound instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host data key holding the handles of the listeners bound for that host.
///
/// Lets [`teardown_host`] detach listeners whose `Instance` is gone.
pub const LISTENERS_KEY: &str = "custom-select-listeners";

/// An instance shared between its registry and its listeners.
pub type SharedInstance = Rc<RefCell<Instance>>;

/// Per-host working data: native control, options, overlay ids, state,
/// and the listener handles this instance registered.
#[derive(Debug)]
pub struct Instance {
    id: InstanceId,
    host: String,
    native: String,
    options: Vec<SelectOption>,
    selected: Option<usize>,
    interaction: InteractionState,
    overlay: OverlayNodes,
    /// Display of the native control before init, restored on teardown.
    native_display: Option<Display>,
    listeners: Vec<ListenerId>,
}

impl Instance {
    /// Mirror the native control, build the overlay, and mount it in `host`.
    ///
    /// Fails before touching the document when `host` has no native control.
    /// No listeners are registered yet; see [`bind`].
    pub fn create(doc: &mut Document, host: &str, config: &Config) -> Result<Self> {
        let snapshot = options::capture(doc, host)?;
        let built = overlay::build(&snapshot.options, snapshot.selected);
        let nodes = built.nodes();

        doc.append(host, built.element)?;

        let native_display = doc.display(&snapshot.native);
        if config.hide_select {
            doc.set_display(&snapshot.native, Some(Display::Hidden));
        }

        let interaction = InteractionState::new(host, nodes.list.clone());
        interaction.sync(doc);

        let instance = Self {
            id: InstanceId::new(),
            host: host.to_string(),
            native: snapshot.native,
            options: snapshot.options,
            selected: snapshot.selected,
            interaction,
            overlay: nodes,
            native_display,
            listeners: Vec::new(),
        };
        log::debug!(
            "[binding] created {} on {host} with {} options",
            instance.id,
            instance.options.len()
        );
        Ok(instance)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn native(&self) -> &str {
        &self.native
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn state(&self) -> OverlayState {
        self.interaction.state()
    }

    pub fn is_open(&self) -> bool {
        self.interaction.is_open()
    }

    pub fn overlay(&self) -> &OverlayNodes {
        &self.overlay
    }

    pub fn placeholder(&self) -> &str {
        &self.overlay.placeholder
    }

    pub fn option_nodes(&self) -> &[String] {
        &self.overlay.options
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Placeholder activation.
    pub fn toggle(&mut self, doc: &mut Document) -> OverlayState {
        self.interaction.toggle(doc)
    }

    pub fn close(&mut self, doc: &mut Document) {
        self.interaction.close(doc);
    }

    /// Option activation. Returns false, changing nothing, for a disabled or
    /// unknown option.
    ///
    /// The placeholder, native control, and selected marker are all updated
    /// before the overlay closes.
    pub fn activate_option(&mut self, doc: &mut Document, index: usize) -> Result<bool> {
        let Some(option) = self.options.get(index) else {
            return Ok(false);
        };
        if option.disabled {
            log::trace!("[binding] {}: option {index} is disabled", self.host);
            return Ok(false);
        }

        self.selected = Some(index);
        doc.set_inner(&self.overlay.placeholder, option.label.clone_fresh())?;

        // The native options may have changed since capture.
        let in_place = doc
            .select_options(&self.native)
            .get(index)
            .is_some_and(|o| doc.option_value(o).as_deref() == Some(option.value.as_str()));
        let synced = if in_place {
            doc.set_selected_index(&self.native, index)
        } else {
            doc.set_select_value(&self.native, &option.value)
        };
        if !synced {
            log::warn!(
                "[binding] {}: native control has no option {:?}",
                self.host,
                option.value
            );
        }

        for (i, node) in self.overlay.options.iter().enumerate() {
            if i == index {
                doc.add_class(node, class::SELECTED);
            } else {
                doc.remove_class(node, class::SELECTED);
            }
        }

        log::debug!(
            "[binding] {}: selected {index} ({:?})",
            self.host,
            option.value
        );
        self.interaction.close(doc);
        Ok(true)
    }

    /// Document-level click. Closes the overlay when `target` is neither the
    /// host nor inside it. Returns whether the click was outside.
    pub fn outside_click(&mut self, doc: &mut Document, target: &str) -> bool {
        if doc.contains(&self.host, target) {
            return false;
        }
        self.interaction.close(doc);
        true
    }

    /// Remove listeners, overlay, and host markers; restore the native
    /// control's display.
    pub fn teardown(&mut self, doc: &mut Document) -> Result<()> {
        for id in self.listeners.drain(..) {
            doc.remove_listener(id);
        }
        doc.remove_data(&self.host, LISTENERS_KEY);
        if doc.exists(&self.overlay.root) {
            doc.remove(&self.overlay.root)?;
        }
        doc.remove_class(&self.host, class::INITIALIZED);
        doc.remove_class(&self.host, class::OPTIONS_TOGGLED);
        doc.set_display(&self.native, self.native_display);
        log::debug!("[binding] tore down {} on {}", self.id, self.host);
        Ok(())
    }
}

/// Register the instance's listeners and record their handles on it.
///
/// Listeners hold a weak reference; once the instance is dropped they do
/// nothing, and [`Instance::teardown`] removes them.
pub fn bind(doc: &mut Document, instance: &SharedInstance, config: &Config) {
    let (placeholder, option_nodes) = {
        let inst = instance.borrow();
        (inst.overlay.placeholder.clone(), inst.overlay.options.clone())
    };
    let mut handles = Vec::with_capacity(option_nodes.len() + 2);

    let weak = Rc::downgrade(instance);
    handles.push(doc.add_listener(
        ListenerScope::Element(placeholder),
        move |doc, _| {
            with_instance(&weak, |inst| {
                inst.toggle(doc);
            });
        },
    ));

    for (index, node) in option_nodes.into_iter().enumerate() {
        let weak = Rc::downgrade(instance);
        handles.push(doc.add_listener(ListenerScope::Element(node), move |doc, _| {
            with_instance(&weak, |inst| {
                if let Err(e) = inst.activate_option(doc, index) {
                    log::warn!("[binding] {}: option {index} failed: {e}", inst.host);
                }
            });
        }));
    }

    if config.hide_on_outside_click {
        let weak = Rc::downgrade(instance);
        handles.push(doc.add_listener(
            ListenerScope::Document,
            move |doc, ev: &ClickEvent| {
                with_instance(&weak, |inst| {
                    inst.outside_click(doc, &ev.target);
                });
            },
        ));
    }

    let mut inst = instance.borrow_mut();
    log::debug!("[binding] {}: {} listeners", inst.host, handles.len());
    let record = handles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    doc.set_data(&inst.host, LISTENERS_KEY, record);
    inst.listeners.extend(handles);
}

/// Tear down the overlay on `host` without its [`Instance`].
///
/// For hosts bound by a controller that no longer owns them. Listeners are
/// found through [`LISTENERS_KEY`]. The pre-init display of the native
/// control is unknown here, so it is simply made visible.
pub fn teardown_host(doc: &mut Document, host: &str) -> Result<()> {
    if let Some(record) = doc.data(host, LISTENERS_KEY).map(str::to_string) {
        for id in record
            .split_whitespace()
            .filter_map(|s| s.parse::<ListenerId>().ok())
        {
            doc.remove_listener(id);
        }
        doc.remove_data(host, LISTENERS_KEY);
    }

    let overlays: Vec<String> = doc
        .children(host)
        .iter()
        .filter(|c| doc.has_class(c, class::SELECT))
        .cloned()
        .collect();
    for overlay in &overlays {
        doc.remove(overlay)?;
    }

    doc.remove_class(host, class::INITIALIZED);
    doc.remove_class(host, class::OPTIONS_TOGGLED);
    if let Ok(native) = options::find_native(doc, host) {
        doc.set_display(&native, None);
    }
    log::debug!("[binding] tore down {} orphaned overlays on {host}", overlays.len());
    Ok(())
}

fn with_instance(weak: &Weak<RefCell<Instance>>, f: impl FnOnce(&mut Instance)) {
    if let Some(instance) = weak.upgrade() {
        f(&mut instance.borrow_mut());
    }
}
