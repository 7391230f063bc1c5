//! Core types for the blackboard agent storage
//!
//! This crate defines the types shared by every other blackboard crate:
//! - [`Value`]: the opaque payload stored under a key
//! - [`AgentId`]: unique identifier of the agent owning a store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod value;

pub use types::AgentId;
pub use value::Value;
