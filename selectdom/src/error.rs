//! Document error types.

use thiserror::Error;

/// Errors from structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this id is mounted.
    #[error("no element with id '{0}' in the document")]
    UnknownNode(String),

    /// Mounting would create a second element with an existing id.
    #[error("an element with id '{0}' is already mounted")]
    DuplicateId(String),

    /// The document root cannot be removed or replaced.
    #[error("the document root cannot be removed")]
    RootRemoval,
}

/// Errors from parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("invalid selector '{selector}': cannot parse '{part}'")]
    Invalid { selector: String, part: String },
}
