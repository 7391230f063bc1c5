//! Agent configuration.
//!
//! Use the builder pattern to configure options:
//!
//! ```
//! use blackboard::{AgentOptions, PairPolicy};
//!
//! let opts = AgentOptions::new()
//!     .name("scout")
//!     .capacity(64)
//!     .pair_policy(PairPolicy::Lenient);
//! assert_eq!(opts.capacity, 64);
//! ```
//!
//! Options can also be loaded from JSON; missing fields take their defaults.

use blackboard_actions::PairPolicy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for creating an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentOptions {
    /// Human label carried in log fields
    pub name: Option<String>,
    /// Initial store capacity
    pub capacity: usize,
    /// Pair policy of add actions built through the agent
    pub pair_policy: PairPolicy,
    /// Reject invocations with fewer arguments than the action requires
    pub enforce_arity: bool,
}

impl AgentOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the agent name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial store capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the pair policy for add actions
    pub fn pair_policy(mut self, policy: PairPolicy) -> Self {
        self.pair_policy = policy;
        self
    }

    /// Enable or disable the argument-count check
    pub fn enforce_arity(mut self, enforce: bool) -> Self {
        self.enforce_arity = enforce;
        self
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            name: None,
            capacity: 0,
            pair_policy: PairPolicy::Strict,
            enforce_arity: true,
        }
    }
}
