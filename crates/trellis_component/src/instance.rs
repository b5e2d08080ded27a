//! Mounted component instances.
//!
//! An [`Instance`] wraps a user [`Component`](crate::component::Component)
//! with everything the runtime manages on its behalf: identity, display
//! naming, per-instance storage, ad-hoc behaviors, and member resolution
//! through the runtime's extension bus.
//!
//! # Resolution
//!
//! [`get`](Instance::get) and [`call`](Instance::call) are the resolution
//! facade. Both run the same two-phase protocol: trigger the bus, then act
//! on the outcome. An attribute read that nothing claims is
//! [`AttributeNotFound`](crate::error::ComponentError::AttributeNotFound); a
//! behavior call additionally falls back to the instance's ad-hoc table
//! before reporting
//! [`UnknownBehavior`](crate::error::ComponentError::UnknownBehavior).
//!
//! Resolution is stateless: nothing about an outcome is cached, so handlers
//! registered after a failed lookup (or component state mutated between
//! calls) are honored by the very next resolution.

use std::sync::Arc;

use serde_json::Value;

use crate::adhoc::AdhocBehaviors;
use crate::component::Component;
use crate::error::ComponentError;
use crate::runtime::{Runtime, RuntimeInner};
use crate::store::DataStore;

// ─────────────────────────────────────────────────────────────────────────────
// InstanceId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a mounted instance.
///
/// Assigned by [`Runtime::mount`]; an instance constructed directly via
/// [`Instance::new`] has no id until one is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(Arc<str>);

impl InstanceId {
    /// Generates a new unique instance ID.
    #[must_use]
    pub fn new() -> Self {
        Self(nanoid::nanoid!().into())
    }

    /// Creates an instance ID from a string.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into().into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Instance
// ─────────────────────────────────────────────────────────────────────────────

/// A component mounted on a runtime.
///
/// The instance owns the boxed component plus the state the runtime manages
/// around it. All member resolution goes through the owning runtime's bus,
/// so every instance mounted on the same runtime sees the same handlers.
pub struct Instance {
    /// Assigned at mount; absent until then.
    id: Option<InstanceId>,
    /// Explicit name override. The display name is derived fresh on every
    /// [`name`](Self::name) call when absent.
    name: Option<String>,
    /// The wrapped user component.
    component: Box<dyn Component>,
    /// Per-instance keyed storage.
    store: DataStore,
    /// Per-instance fallback behaviors.
    adhoc: AdhocBehaviors,
    /// The owning runtime's shared state.
    runtime: Arc<RuntimeInner>,
}

impl core::fmt::Debug for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("component", &self.component.type_path())
            .finish_non_exhaustive()
    }
}

impl Instance {
    /// Wraps a component for the given runtime, without assigning an id.
    ///
    /// Most callers want [`Runtime::mount`], which also assigns a fresh
    /// [`InstanceId`]. Direct construction exists for rehydration flows
    /// where the id arrives later via [`set_id`](Self::set_id).
    #[must_use]
    pub fn new(component: impl Component, runtime: &Runtime) -> Self {
        Self {
            id: None,
            name: None,
            component: Box::new(component),
            store: DataStore::new(),
            adhoc: AdhocBehaviors::new(),
            runtime: runtime.shared(),
        }
    }

    /// Returns the instance id.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::IdentityNotSet`] if no id has been
    /// assigned yet.
    pub fn id(&self) -> Result<&InstanceId, ComponentError> {
        self.id.as_ref().ok_or(ComponentError::IdentityNotSet)
    }

    /// Assigns the instance id, replacing any previous one.
    pub fn set_id(&mut self, id: InstanceId) {
        self.id = Some(id);
    }

    /// Returns the instance's display name.
    ///
    /// An explicitly set, non-empty name wins; an empty name counts as
    /// unset. Otherwise the name is resolved through the runtime's registry
    /// from the component's type path and the configured root namespace.
    /// The derived name is recomputed on every call, so alias or config
    /// changes are reflected immediately. Never returns an empty string.
    #[must_use]
    pub fn name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            return name.to_owned();
        }
        let namespace = self.runtime.config.read().root_namespace.clone();
        self.runtime
            .registry
            .display_name(self.component.type_path(), &namespace)
    }

    /// Sets an explicit display name, overriding derivation. Setting an
    /// empty name leaves derivation in charge.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the wrapped component's type path.
    #[must_use]
    pub fn type_path(&self) -> &'static str {
        self.component.type_path()
    }

    /// Resolves an attribute read through the runtime's bus.
    ///
    /// Handlers may claim any JSON value, `null` included; a claimed `null`
    /// is a successful resolution, not a miss.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::AttributeNotFound`] if no handler claims
    /// the attribute, or [`ComponentError::Handler`] if a handler fails.
    pub fn get(&mut self, attribute: &str) -> Result<Value, ComponentError> {
        let runtime = Arc::clone(&self.runtime);
        let finish = runtime.bus.trigger_attribute(self, attribute)?;
        match finish.claimed() {
            Some(value) => Ok(value),
            None => Err(ComponentError::AttributeNotFound {
                attribute: attribute.to_owned(),
                component: self.name(),
            }),
        }
    }

    /// Checks whether an attribute resolves on this instance.
    ///
    /// Only [`AttributeNotFound`](ComponentError::AttributeNotFound) maps to
    /// `Ok(false)`; a handler failure during the probe propagates as an
    /// error rather than being misread as absence.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Handler`] if a handler fails.
    pub fn has(&mut self, attribute: &str) -> Result<bool, ComponentError> {
        match self.get(attribute) {
            Ok(_) => Ok(true),
            Err(ComponentError::AttributeNotFound { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Resolves a behavior call.
    ///
    /// The runtime's bus gets the first shot; if no handler claims, the
    /// instance's ad-hoc table is consulted. The claimed (or returned)
    /// value is the behavior's result, and a claimed `null` counts as a
    /// resolution exactly as for attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::UnknownBehavior`] if neither tier resolves
    /// the behavior, [`ComponentError::Handler`] if a bus handler fails, or
    /// [`ComponentError::BehaviorFailed`] if the ad-hoc behavior itself
    /// errors.
    pub fn call(&mut self, behavior: &str, args: &[Value]) -> Result<Value, ComponentError> {
        let runtime = Arc::clone(&self.runtime);
        let finish = runtime.bus.trigger_behavior(self, behavior, args)?;
        if let Some(value) = finish.claimed() {
            return Ok(value);
        }

        if let Some(behavior_fn) = self.adhoc.get(behavior) {
            return (*behavior_fn)(self, args).map_err(|source| ComponentError::BehaviorFailed {
                behavior: behavior.to_owned(),
                source,
            });
        }

        Err(ComponentError::UnknownBehavior {
            component_type: self.component.type_path().to_owned(),
            behavior: behavior.to_owned(),
        })
    }

    /// Returns the wrapped component as a trait object.
    #[must_use]
    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }

    /// Returns the wrapped component as a mutable trait object.
    pub fn component_mut(&mut self) -> &mut dyn Component {
        self.component.as_mut()
    }

    /// Downcasts the wrapped component to a concrete type.
    #[must_use]
    pub fn component_as<C: Component>(&self) -> Option<&C> {
        self.component.downcast_ref::<C>()
    }

    /// Downcasts the wrapped component to a concrete type, mutably.
    pub fn component_as_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.component.downcast_mut::<C>()
    }

    /// Returns the instance's keyed storage.
    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Returns the instance's keyed storage, mutably.
    pub fn store_mut(&mut self) -> &mut DataStore {
        &mut self.store
    }

    /// Returns the instance's ad-hoc behavior table.
    #[must_use]
    pub fn adhoc(&self) -> &AdhocBehaviors {
        &self.adhoc
    }

    /// Returns the instance's ad-hoc behavior table, mutably.
    pub fn adhoc_mut(&mut self) -> &mut AdhocBehaviors {
        &mut self.adhoc
    }

    /// Returns a handle to the owning runtime.
    #[must_use]
    pub fn runtime(&self) -> Runtime {
        Runtime::from_shared(Arc::clone(&self.runtime))
    }
}
