//! `storage/remove`: remove keys and return their values

use blackboard_core::Value;
use tracing::debug;

use crate::action::{keys_of, protected_action, Action, Context};
use crate::error::Result;
use crate::resolver::Resolver;

const NAME: &str = "storage/remove";

/// Remove unprotected keys, appending each removed value to the output
///
/// Output order follows argument order. Protected keys and keys that are
/// not present contribute nothing.
#[derive(Debug, Clone)]
pub struct RemoveAction {
    resolver: Resolver,
}

protected_action!(RemoveAction);

impl RemoveAction {
    /// Build the action with an explicit resolver
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Action for RemoveAction {
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
        output: &mut Vec<Value>,
    ) -> Result<()> {
        let keys = keys_of(NAME, arguments)?;
        let store = context.store_mut();

        for key in keys {
            if self.resolver.classify(key) {
                debug!(action = NAME, key, "skipping protected key");
                continue;
            }
            match store.remove(key) {
                Some(value) => output.push(value),
                None => debug!(action = NAME, key, "key not present"),
            }
        }

        Ok(())
    }
}
