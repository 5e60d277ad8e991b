//! Styled replacement for native single-choice controls.
//!
//! A [`CustomSelect`] resolves a [`Target`] to host elements in a
//! [`selectdom::Document`]. For each host it mirrors the native `select`,
//! builds an overlay (placeholder plus option list), and binds click
//! listeners that keep the overlay and the native control in sync. The native
//! control stays the source of truth for the selected value.
//!
//! ```ignore
//! let mut doc = Document::with_body([picker])?;
//! let select = CustomSelect::new(&mut doc, Target::selector(".picker"), Config::default())?;
//! let placeholder = select.instance("host").unwrap().placeholder().to_string();
//! doc.click(&placeholder)?;
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod options;
pub mod overlay;
pub mod registry;
pub mod state;

pub use binding::{Instance, InstanceId, SharedInstance};
pub use config::{AfterInit, Config};
pub use error::{Error, Result};
pub use options::{OptionSnapshot, SelectOption};
pub use overlay::{Overlay, OverlayNodes};
pub use registry::{CustomSelect, InitReport, Target};
pub use state::{InteractionState, OverlayState};
