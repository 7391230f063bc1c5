//! Protected-key resolution
//!
//! A [`Resolver`] decides, per key, whether an action treats the key as
//! protected. What "protected" means is up to the action: Add and Remove
//! leave protected keys untouched, Clear keeps them, Exists hides them.
//!
//! Three shapes are supported:
//!
//! | Variant | `classify(key)` |
//! |---------|-----------------|
//! | `Unprotected` | always `false` |
//! | `Keys` | `key` is in the literal set |
//! | `Predicate` | whatever the caller's [`KeyClassifier`] says |

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied protection logic
///
/// Implemented for every `Fn(&str) -> bool + Send + Sync`, so closures can
/// be used directly. Implementations must be synchronous and must not block;
/// results may change between calls.
pub trait KeyClassifier: Send + Sync {
    /// Return `true` if `key` is protected
    fn classify(&self, key: &str) -> bool;
}

impl<F> KeyClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn classify(&self, key: &str) -> bool {
        self(key)
    }
}

/// Protected-key policy of an action
#[derive(Clone, Default)]
pub enum Resolver {
    /// No key is protected
    #[default]
    Unprotected,

    /// Exactly the listed keys are protected
    Keys(FxHashSet<String>),

    /// Protection is delegated to caller logic
    Predicate(Arc<dyn KeyClassifier>),
}

impl Resolver {
    /// Resolver that protects nothing
    pub fn none() -> Self {
        Resolver::Unprotected
    }

    /// Resolver protecting a literal set of keys
    ///
    /// Duplicates collapse; an empty sequence protects nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use blackboard_actions::Resolver;
    ///
    /// let resolver = Resolver::keys(["foo", "bar"]);
    /// assert!(resolver.classify("foo"));
    /// assert!(!resolver.classify("baz"));
    /// ```
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Resolver::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Resolver delegating to a closure
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Resolver::Predicate(Arc::new(predicate))
    }

    /// Resolver delegating to any [`KeyClassifier`] implementation
    pub fn classifier<C>(classifier: C) -> Self
    where
        C: KeyClassifier + 'static,
    {
        Resolver::Predicate(Arc::new(classifier))
    }

    /// Return `true` if `key` is protected
    #[inline]
    pub fn classify(&self, key: &str) -> bool {
        match self {
            Resolver::Unprotected => false,
            Resolver::Keys(keys) => keys.contains(key),
            Resolver::Predicate(classifier) => classifier.classify(key),
        }
    }

    /// Classify a batch of keys
    ///
    /// The result has the same length and order as the input.
    pub fn forbidden_keys<I, S>(&self, keys: I) -> Vec<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().map(|k| self.classify(k.as_ref())).collect()
    }

    /// Check whether this resolver can never protect a key
    pub fn is_unprotected(&self) -> bool {
        match self {
            Resolver::Unprotected => true,
            Resolver::Keys(keys) => keys.is_empty(),
            Resolver::Predicate(_) => false,
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::Unprotected => f.write_str("Unprotected"),
            Resolver::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            Resolver::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Resolver {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Resolver::keys(iter)
    }
}
