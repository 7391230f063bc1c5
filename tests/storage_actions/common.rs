//! Shared test utilities

use std::collections::HashSet;

use blackboard::prelude::*;

/// Create a fresh agent with default options
pub fn create_agent() -> Agent {
    Agent::new()
}

/// Create an agent whose store holds `"value 0".."value {n-1}"` mapped to
/// their index
pub fn create_numbered_agent(n: i64) -> Agent {
    let mut agent = Agent::new();
    for i in 0..n {
        agent.storage_mut().put(format!("value {}", i), i);
    }
    agent
}

/// Build string argument values
pub fn keys(keys: &[&str]) -> Vec<Value> {
    keys.iter().map(|k| Value::from(*k)).collect()
}

/// Unwrap a boolean output sink
pub fn bools(output: &[Value]) -> Vec<bool> {
    output
        .iter()
        .map(|v| v.as_bool().expect("Expected Bool output"))
        .collect()
}

/// Keys of a store as a set
pub fn key_set(store: &Store) -> HashSet<String> {
    store.keys().map(str::to_string).collect()
}

/// Owned string set from literals
pub fn set(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
