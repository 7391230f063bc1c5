//! Agent entry point.
//!
//! An [`Agent`] owns exactly one [`Store`] for its whole lifetime and is the
//! invoking layer for storage actions: it checks the minimal argument
//! number, hands itself to the action as the execution [`Context`] and
//! collects the output.

use blackboard_actions::{Action, AddAction, Context, Error as ActionError, Resolver};
use blackboard_core::{AgentId, Value};
use blackboard_storage::Store;
use tracing::{debug, debug_span, warn};

use crate::error::Result;
use crate::options::AgentOptions;

/// An agent and its blackboard.
///
/// # Example
///
/// ```
/// use blackboard::prelude::*;
///
/// let mut agent = Agent::new();
/// agent.invoke(&AddAction::new(), &["answer".into(), 42.into()])?;
///
/// let out = agent.invoke(&ExistsAction::new(), &["answer".into()])?;
/// assert_eq!(out, vec![Value::Bool(true)]);
/// # Ok::<(), blackboard::Error>(())
/// ```
#[derive(Debug)]
pub struct Agent {
    id: AgentId,
    options: AgentOptions,
    storage: Store,
}

impl Agent {
    /// Create an agent with default options.
    pub fn new() -> Self {
        Self::with_options(AgentOptions::default())
    }

    /// Create an agent with the given options.
    pub fn with_options(options: AgentOptions) -> Self {
        let storage = Store::with_capacity(options.capacity);
        let id = AgentId::new();
        debug!(agent = %id, name = options.name.as_deref().unwrap_or(""), "agent created");
        Self {
            id,
            options,
            storage,
        }
    }

    /// Create a builder for agent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use blackboard::{Agent, PairPolicy};
    ///
    /// let agent = Agent::builder()
    ///     .name("scout")
    ///     .pair_policy(PairPolicy::Lenient)
    ///     .build();
    /// assert_eq!(agent.name(), Some("scout"));
    /// ```
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Unique id of this agent.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Name from the options, if any.
    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    /// Options the agent was created with.
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    /// The agent's store.
    pub fn storage(&self) -> &Store {
        &self.storage
    }

    /// The agent's store, mutably.
    ///
    /// Direct writes bypass every resolver.
    pub fn storage_mut(&mut self) -> &mut Store {
        &mut self.storage
    }

    /// Build an add action using this agent's pair policy.
    pub fn add_action(&self, resolver: Resolver) -> AddAction {
        AddAction::with_resolver(resolver).pair_policy(self.options.pair_policy)
    }

    /// Invoke an action and return its output.
    pub fn invoke(&mut self, action: &dyn Action, arguments: &[Value]) -> Result<Vec<Value>> {
        let mut output = Vec::new();
        self.invoke_into(action, arguments, &mut output)?;
        Ok(output)
    }

    /// Invoke an action, appending its output to `output`.
    pub fn invoke_into(
        &mut self,
        action: &dyn Action,
        arguments: &[Value],
        output: &mut Vec<Value>,
    ) -> Result<()> {
        let span = debug_span!("invoke", agent = %self.id, action = action.name());
        let _enter = span.enter();

        let required = action.minimal_argument_number();
        if self.options.enforce_arity && arguments.len() < required {
            warn!(required, actual = arguments.len(), "not enough arguments");
            return Err(ActionError::NotEnoughArguments {
                action: action.name(),
                required,
                actual: arguments.len(),
            }
            .into());
        }

        let before = output.len();
        action.execute(&mut *self, arguments, output)?;
        debug!(
            arguments = arguments.len(),
            outputs = output.len() - before,
            stored = self.storage.len(),
            "action completed"
        );
        Ok(())
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for Agent {
    fn store(&self) -> &Store {
        &self.storage
    }

    fn store_mut(&mut self) -> &mut Store {
        &mut self.storage
    }
}

/// Builder for [`Agent`].
#[derive(Debug, Clone, Default)]
pub struct AgentBuilder {
    options: AgentOptions,
}

impl AgentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once.
    pub fn options(mut self, options: AgentOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the agent name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.name(name);
        self
    }

    /// Set the initial store capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.capacity(capacity);
        self
    }

    /// Set the pair policy for add actions built through the agent.
    pub fn pair_policy(mut self, policy: blackboard_actions::PairPolicy) -> Self {
        self.options = self.options.pair_policy(policy);
        self
    }

    /// Enable or disable the argument-count check.
    pub fn enforce_arity(mut self, enforce: bool) -> Self {
        self.options = self.options.enforce_arity(enforce);
        self
    }

    /// Create the agent.
    pub fn build(self) -> Agent {
        Agent::with_options(self.options)
    }
}
