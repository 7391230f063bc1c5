//! # Blackboard
//!
//! Per-agent in-memory key-value storage with protected keys.
//!
//! Every agent owns one [`Store`]. Four storage actions read and write it,
//! each gated by a [`Resolver`] that decides which keys are protected:
//!
//! - [`AddAction`] - insert or replace pairs; protected keys are not written
//! - [`RemoveAction`] - remove keys and return their values; protected keys stay
//! - [`ClearAction`] - remove everything except the protected keys
//! - [`ExistsAction`] - report presence; protected keys look absent
//!
//! ## Quick Start
//!
//! ```
//! use blackboard::prelude::*;
//!
//! let mut agent = Agent::new();
//! agent.invoke(&AddAction::new(), &["foo".into(), 123.into(), "bar".into(), 456.into()])?;
//!
//! // "foo" is protected: it is neither removed nor reported
//! let removed = agent.invoke(&RemoveAction::with_keys(["foo"]), &["foo".into(), "bar".into()])?;
//! assert_eq!(removed, vec![Value::Int(456)]);
//! assert_eq!(agent.storage().get("foo"), Some(&Value::Int(123)));
//! # Ok::<(), blackboard::Error>(())
//! ```
//!
//! ## Resolvers
//!
//! Every action can be built in the same four ways:
//!
//! 1. **No protection** - `AddAction::new()`
//! 2. **Literal keys** - `AddAction::with_keys(["a", "b"])`, or any iterator of keys
//! 3. **Predicate** - `AddAction::with_predicate(|key| key.starts_with("sys/"))`
//! 4. **Explicit resolver** - `AddAction::with_resolver(resolver)`

#![warn(missing_docs)]

mod agent;
mod error;
mod options;

pub mod prelude;

// Re-export main entry points
pub use agent::{Agent, AgentBuilder};
pub use error::{Error, Result};
pub use options::AgentOptions;

// Re-export actions
pub use blackboard_actions::{
    Action, AddAction, ClearAction, Context, ExistsAction, KeyClassifier, PairPolicy,
    RemoveAction, Resolver,
};

// Re-export core types
pub use blackboard_core::{AgentId, Value};
pub use blackboard_storage::Store;
