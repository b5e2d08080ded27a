//! Ad-hoc behavior table.
//!
//! The last resolution tier for behavior calls: when no bus handler claims a
//! behavior, the instance consults this table before reporting the behavior
//! as unknown. Entries are attached to a single instance at runtime, which
//! makes them the right spot for one-off extensions that do not warrant a
//! full feature.

use std::sync::Arc;

use hashbrown::HashMap;
use serde_json::Value;
use trellis_dispatch::BoxError;

use crate::instance::Instance;

/// Signature of an ad-hoc behavior: the owning instance and the call
/// arguments in, a JSON result out.
pub type BehaviorFn = dyn Fn(&mut Instance, &[Value]) -> Result<Value, BoxError> + Send + Sync;

/// Table of ad-hoc behaviors attached to one instance.
#[derive(Default)]
pub struct AdhocBehaviors {
    /// Registered behaviors by name.
    behaviors: HashMap<String, Arc<BehaviorFn>>,
}

impl core::fmt::Debug for AdhocBehaviors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdhocBehaviors")
            .field("behaviors", &self.names())
            .finish()
    }
}

impl AdhocBehaviors {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a behavior under a name, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, behavior: F)
    where
        F: Fn(&mut Instance, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.behaviors.insert(name.into(), Arc::new(behavior));
    }

    /// Returns the behavior registered under a name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<BehaviorFn>> {
        self.behaviors.get(name).cloned()
    }

    /// Checks if a behavior is registered under a name.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    /// Lists registered behavior names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.behaviors.keys().cloned().collect()
    }

    /// Returns the number of registered behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Checks if the table has no behaviors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}
