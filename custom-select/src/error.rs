//! Controller error types.

use selectdom::{DomError, SelectorError};
use thiserror::Error;

/// Errors raised while constructing, initializing, or tearing down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The target does not name element(s) or a usable selector.
    /// Fatal to construction.
    #[error("invalid target: {reason}")]
    InvalidTarget { reason: String },

    /// A host element holds no `select`. Fatal to that element only.
    #[error("no <select> found within element '{host}'")]
    MissingNativeControl { host: String },

    /// The host already carries an overlay from an earlier init.
    #[error("element '{host}' is already initialized")]
    AlreadyInitialized { host: String },

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

pub type Result<T> = std::result::Result<T, Error>;
