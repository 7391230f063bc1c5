//! Storage layer for the blackboard
//!
//! This crate implements the per-agent store:
//! - Store: FxHashMap-backed key-value map owned by a single agent
//! - No gating: protected keys are enforced by `blackboard-actions`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::Store;
