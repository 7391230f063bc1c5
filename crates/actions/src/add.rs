//! `storage/add`: insert or replace key-value pairs
//!
//! Arguments are flattened pairs `key1, value1, key2, value2, ...`. A pair
//! whose key is protected is skipped without error; every other pair
//! overwrites whatever the store held for its key.

use blackboard_core::Value;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{key_at, protected_action, Action, Context};
use crate::error::{Error, Result};
use crate::resolver::Resolver;

const NAME: &str = "storage/add";

/// How `storage/add` treats an odd number of arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    /// Reject the call with [`Error::MalformedArguments`] before touching
    /// the store
    #[default]
    Strict,

    /// Process the complete pairs and ignore the trailing argument
    Lenient,
}

/// Insert or replace unprotected key-value pairs
#[derive(Debug, Clone)]
pub struct AddAction {
    resolver: Resolver,
    pair_policy: PairPolicy,
}

protected_action!(AddAction);

impl AddAction {
    /// Build the action with an explicit resolver
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            resolver,
            pair_policy: PairPolicy::default(),
        }
    }

    /// Set how a trailing unpaired argument is handled
    pub fn pair_policy(mut self, policy: PairPolicy) -> Self {
        self.pair_policy = policy;
        self
    }

    /// The configured pair policy
    pub fn policy(&self) -> PairPolicy {
        self.pair_policy
    }
}

impl Action for AddAction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn minimal_argument_number(&self) -> usize {
        1
    }

    fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn execute(
        &self,
        context: &mut dyn Context,
        arguments: &[Value],
        _output: &mut Vec<Value>,
    ) -> Result<()> {
        if arguments.len() % 2 != 0 {
            match self.pair_policy {
                PairPolicy::Strict => {
                    return Err(Error::MalformedArguments {
                        action: NAME,
                        reason: format!(
                            "expected key-value pairs, got {} arguments",
                            arguments.len()
                        ),
                    });
                }
                PairPolicy::Lenient => {
                    debug!(
                        action = NAME,
                        arguments = arguments.len(),
                        "ignoring trailing unpaired argument"
                    );
                }
            }
        }

        // Every key is checked before the first write.
        let pairs = arguments
            .chunks_exact(2)
            .enumerate()
            .map(|(pair, entry)| Ok((key_at(NAME, &entry[0], pair * 2)?, &entry[1])))
            .collect::<Result<Vec<_>>>()?;

        let store = context.store_mut();
        for (key, value) in pairs {
            if self.resolver.classify(key) {
                debug!(action = NAME, key, "skipping protected key");
                continue;
            }
            store.put(key, value.clone());
        }

        Ok(())
    }
}
