//! Identity types
//!
//! - [`AgentId`]: unique identifier for the agent that owns a store

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an agent
///
/// Every agent owns exactly one store for its whole lifetime. The id is
/// carried in log fields so store activity of different agents can be told
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(Uuid);

impl AgentId {
    /// Create a new random AgentId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use blackboard_core::AgentId;
    ///
    /// let id1 = AgentId::new();
    /// let id2 = AgentId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        AgentId(Uuid::new_v4())
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
