//! `storage/clear`: drop every unprotected key
//!
//! Protection is inverted here: the resolver selects the keys that
//! *survive*. Arguments are ignored and nothing is written to the output.

use blackboard_core::Value;
use tracing::debug;

use crate::action::{protected_action, Action, Context};
use crate::error::Result;
use crate::resolver::Resolver;

const NAME: &str = "storage/clear";

/// Remove every key the resolver does not protect
#[derive(Debug, Clone)]
pub struct ClearAction {
    resolver: Resolver,
}

protected_action!(ClearAction);

impl ClearAction {
    /// Build the action with an explicit resolver
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Action for ClearAction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn minimal_argument_number(&self) -> usize {
        0
    }

    fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn execute(
        &self,
        context: &mut dyn Context,
        _arguments: &[Value],
        _output: &mut Vec<Value>,
    ) -> Result<()> {
        let store = context.store_mut();

        if self.resolver.is_unprotected() {
            debug!(action = NAME, removed = store.len(), "clearing store");
            store.clear();
            return Ok(());
        }

        let removed = store.retain(|key| self.resolver.classify(key));
        debug!(action = NAME, removed, kept = store.len(), "cleared unprotected keys");
        Ok(())
    }
}
