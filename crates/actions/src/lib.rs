//! Protected-key storage actions
//!
//! Four actions operate on an agent's [`Store`](blackboard_storage::Store),
//! each gated by a [`Resolver`]:
//!
//! | Action | Protected key | Output |
//! |--------|---------------|--------|
//! | [`AddAction`] | not written | none |
//! | [`RemoveAction`] | not removed | removed values |
//! | [`ClearAction`] | kept, everything else removed | none |
//! | [`ExistsAction`] | reported as absent | one `Bool` per key |
//!
//! ```
//! use blackboard_actions::{Action, RemoveAction};
//! use blackboard_core::Value;
//! use blackboard_storage::Store;
//!
//! let mut store = Store::new();
//! store.put("foo", 123);
//! store.put("bar", 456);
//!
//! let mut output = Vec::new();
//! RemoveAction::with_keys(["foo"])
//!     .execute(&mut store, &["foo".into(), "bar".into()], &mut output)
//!     .unwrap();
//!
//! assert_eq!(output, vec![Value::Int(456)]);
//! assert!(store.contains_key("foo"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod add;
pub mod clear;
pub mod error;
pub mod exists;
pub mod remove;
pub mod resolver;

pub use action::{Action, Context};
pub use add::{AddAction, PairPolicy};
pub use clear::ClearAction;
pub use error::{Error, Result};
pub use exists::ExistsAction;
pub use remove::RemoveAction;
pub use resolver::{KeyClassifier, Resolver};
