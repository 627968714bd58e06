//! Error types for the Snare engine.

use thiserror::Error;

/// All errors that can be produced by the Snare engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnareError {
    /// A direction name outside the accepted set was supplied to a
    /// string-typed activation query.
    #[error("invalid direction `{0}`: expected `both`, `onGet` or `onSet`")]
    InvalidDirection(String),

    /// A write targeted a read-only property slot.
    #[error("cannot write to read-only property `{0}`")]
    ReadOnlyProperty(String),

    /// A redefinition targeted a non-configurable property slot.
    #[error("cannot redefine non-configurable property `{0}`")]
    NonConfigurable(String),
}

/// Convenient `Result` alias for fallible engine operations.
pub type SnareResult<T> = Result<T, SnareError>;
