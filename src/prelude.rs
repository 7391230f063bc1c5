//! Convenient imports for the blackboard.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use blackboard::prelude::*;
//!
//! let mut agent = Agent::new();
//! agent.storage_mut().put("key", "value");
//! ```

// Main entry point
pub use crate::agent::{Agent, AgentBuilder};
pub use crate::options::AgentOptions;

// Error handling
pub use crate::error::{Error, Result};

// Actions
pub use blackboard_actions::{
    Action, AddAction, ClearAction, Context, ExistsAction, KeyClassifier, PairPolicy,
    RemoveAction, Resolver,
};

// Core types
pub use blackboard_core::Value;
pub use blackboard_storage::Store;
