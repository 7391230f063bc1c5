//! `storage/exists`: check keys for visible presence
//!
//! A protected key is reported as absent whether or not it is stored.

use blackboard_core::Value;

use crate::action::{keys_of, protected_action, Action, Context};
use crate::error::Result;
use crate::resolver::Resolver;

const NAME: &str = "storage/exists";

/// Report, per key, whether it is present and unprotected
///
/// Appends one `Value::Bool` per argument, in argument order.
#[derive(Debug, Clone)]
pub struct ExistsAction {
    resolver: Resolver,
}

protected_action!(ExistsAction);

impl ExistsAction {
    /// Build the action with an explicit resolver
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Action for ExistsAction {
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
        let store = context.store();

        output.reserve(keys.len());
        output.extend(
            keys.into_iter()
                .map(|key| Value::Bool(store.contains_key(key) && !self.resolver.classify(key))),
        );

        Ok(())
    }
}
