//! The action contract shared by all storage actions
//!
//! An action is executed by an invoking layer (an agent's interpreter) with
//! three things:
//!
//! 1. A [`Context`] giving access to the agent's [`Store`]
//! 2. The ordered argument values
//! 3. An output sink the action appends its results to
//!
//! The invoking layer checks `arguments.len() >= minimal_argument_number()`
//! before dispatch; actions do not repeat that check.

use blackboard_core::Value;
use blackboard_storage::Store;

use crate::error::{Error, Result};
use crate::resolver::Resolver;

/// Execution context handed to an action
///
/// Gives access to the store of the agent the action runs for. A bare
/// [`Store`] is itself a context.
pub trait Context {
    /// The agent's store
    fn store(&self) -> &Store;

    /// The agent's store, mutably
    fn store_mut(&mut self) -> &mut Store;
}

impl Context for Store {
    fn store(&self) -> &Store {
        self
    }

    fn store_mut(&mut self) -> &mut Store {
        self
    }
}

/// A storage action gated by a protected-key [`Resolver`]
pub trait Action: Send + Sync {
    /// Stable action name used in logs and errors
    fn name(&self) -> &'static str;

    /// Minimal number of arguments the invoking layer must supply
    fn minimal_argument_number(&self) -> usize;

    /// The protected-key policy of this action
    fn resolver(&self) -> &Resolver;

    /// Classify a batch of keys with this action's resolver
    ///
    /// Same length and order as `keys`.
    fn forbidden_keys(&self, keys: &[&str]) -> Vec<bool> {
        self.resolver().forbidden_keys(keys.iter())
    }

    /// Run the action
    ///
    /// Results are appended to `output`; existing content is left alone.
    fn execute(
        &self,
        context: &mut dyn Context,
        arguments: &[Value],
        output: &mut Vec<Value>,
    ) -> Result<()>;
}

/// Read the argument at `index` as a key
pub(crate) fn key_at<'a>(action: &'static str, value: &'a Value, index: usize) -> Result<&'a str> {
    value.as_str().ok_or(Error::InvalidKey {
        action,
        index,
        actual: value.type_name(),
    })
}

/// Read every argument as a key, failing on the first non-string
pub(crate) fn keys_of<'a>(action: &'static str, arguments: &'a [Value]) -> Result<Vec<&'a str>> {
    arguments
        .iter()
        .enumerate()
        .map(|(index, value)| key_at(action, value, index))
        .collect()
}

/// Constructors shared by every action
///
/// Expects the action type to provide `with_resolver(Resolver) -> Self` and
/// a `resolver` field.
macro_rules! protected_action {
    ($action:ident) => {
        impl $action {
            /// Build the action without protected keys
            pub fn new() -> Self {
                Self::with_resolver($crate::resolver::Resolver::Unprotected)
            }

            /// Build the action protecting a literal set of keys
            ///
            /// Accepts arrays (`with_keys(["a", "b"])`) as well as any
            /// iterator of keys.
            pub fn with_keys<I, S>(keys: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self::with_resolver($crate::resolver::Resolver::keys(keys))
            }

            /// Build the action protecting every key `predicate` accepts
            pub fn with_predicate<F>(predicate: F) -> Self
            where
                F: Fn(&str) -> bool + Send + Sync + 'static,
            {
                Self::with_resolver($crate::resolver::Resolver::predicate(predicate))
            }
        }

        impl Default for $action {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$crate::resolver::Resolver> for $action {
            fn from(resolver: $crate::resolver::Resolver) -> Self {
                Self::with_resolver(resolver)
            }
        }
    };
}

pub(crate) use protected_action;
