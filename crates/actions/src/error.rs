//! Error types for storage actions
//!
//! Protected keys never produce an error. The only failures are argument
//! shapes the action cannot interpret, plus the arity check performed by
//! the invoking layer before dispatch.

use thiserror::Error;

/// Storage action errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Arguments do not have the shape the action expects
    #[error("{action}: malformed arguments: {reason}")]
    MalformedArguments {
        /// Action name
        action: &'static str,
        /// What is wrong with the arguments
        reason: String,
    },

    /// A value in key position is not a string
    #[error("{action}: argument {index} must be a String key, got {actual}")]
    InvalidKey {
        /// Action name
        action: &'static str,
        /// Position of the offending argument
        index: usize,
        /// Type name of the offending argument
        actual: &'static str,
    },

    /// Fewer arguments than the action's minimal argument number
    ///
    /// Raised by the invoking layer, never by an action's `execute`.
    #[error("{action}: requires at least {required} arguments, got {actual}")]
    NotEnoughArguments {
        /// Action name
        action: &'static str,
        /// Minimal argument number of the action
        required: usize,
        /// Number of arguments supplied
        actual: usize,
    },
}

/// Result type for storage actions
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Name of the action that raised the error
    pub fn action(&self) -> &'static str {
        match self {
            Error::MalformedArguments { action, .. }
            | Error::InvalidKey { action, .. }
            | Error::NotEnoughArguments { action, .. } => action,
        }
    }
}
