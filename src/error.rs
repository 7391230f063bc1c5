//! Unified error types for the blackboard.
//!
//! This module provides a clean error type that wraps the errors of the
//! storage actions and configuration loading, and presents a consistent
//! interface to users.

use thiserror::Error;

/// All blackboard errors.
///
/// Protected keys never cause an error; see the action documentation.
#[derive(Debug, Error)]
pub enum Error {
    /// Arguments do not have the shape an action expects
    #[error("malformed arguments: {0}")]
    MalformedArguments(String),

    /// A value in key position is not a string
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Fewer arguments than the action's minimal argument number
    #[error("not enough arguments: {0}")]
    NotEnoughArguments(String),

    /// Options could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for blackboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the arguments themselves were unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedArguments(_) | Error::InvalidKey(_))
    }

    /// Check if this is an argument-count rejection.
    pub fn is_arity(&self) -> bool {
        matches!(self, Error::NotEnoughArguments(_))
    }
}

// Convert from action errors
impl From<blackboard_actions::Error> for Error {
    fn from(e: blackboard_actions::Error) -> Self {
        use blackboard_actions::Error as ActionError;
        let action = e.action();
        match e {
            ActionError::MalformedArguments { reason, .. } => {
                Error::MalformedArguments(format!("{}: {}", action, reason))
            }
            ActionError::InvalidKey { index, actual, .. } => Error::InvalidKey(format!(
                "{}: argument {} is {}, expected String",
                action, index, actual
            )),
            ActionError::NotEnoughArguments {
                required, actual, ..
            } => Error::NotEnoughArguments(format!(
                "{}: requires {}, got {}",
                action, required, actual
            )),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
