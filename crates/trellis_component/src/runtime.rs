//! The component runtime.
//!
//! A [`Runtime`] owns everything instances share: the extension bus, the
//! component registry, and the configuration. Features are composed into a
//! runtime up front; components are then mounted onto it and resolve their
//! members through it.
//!
//! # Example
//!
//! ```
//! use trellis_component::component::Component;
//! use trellis_component::runtime::Runtime;
//! use serde_json::json;
//!
//! struct Greeter;
//! impl Component for Greeter {}
//!
//! let runtime = Runtime::new();
//! runtime.bus().on_attribute("greetings", |_, name, claim| {
//!     if name == "greeting" {
//!         claim.set(json!("hello"));
//!     }
//!     Ok(())
//! });
//!
//! let mut instance = runtime.mount(Greeter);
//! assert_eq!(instance.get("greeting")?, json!("hello"));
//! # Ok::<(), trellis_component::error::ComponentError>(())
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use trellis_dispatch::ExtensionBus;

use crate::component::Component;
use crate::config::RuntimeConfig;
use crate::feature::{Feature, Features};
use crate::instance::{Instance, InstanceId};
use crate::registry::ComponentRegistry;

// ─────────────────────────────────────────────────────────────────────────────
// RuntimeInner
// ─────────────────────────────────────────────────────────────────────────────

/// State shared by a runtime and every instance mounted on it.
pub(crate) struct RuntimeInner {
    /// The extension bus all member resolution goes through.
    pub(crate) bus: ExtensionBus<Instance>,
    /// Alias bookkeeping and display-name resolution.
    pub(crate) registry: ComponentRegistry,
    /// Current configuration.
    pub(crate) config: RwLock<RuntimeConfig>,
    /// Names of applied features, in application order.
    pub(crate) applied: RwLock<Vec<String>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime
// ─────────────────────────────────────────────────────────────────────────────

/// Shared handle to a component runtime.
///
/// Cloning is shallow: clones share the same bus, registry, and config, so
/// a feature may keep a clone to reach the runtime after composition.
#[derive(Clone)]
pub struct Runtime {
    /// The shared state, also held by every mounted instance.
    shared: Arc<RuntimeInner>,
}

impl core::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &*self.shared.config.read())
            .field("features", &self.feature_names())
            .finish_non_exhaustive()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Creates a runtime with default configuration and no features.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    /// Creates a runtime with the given configuration.
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            shared: Arc::new(RuntimeInner {
                bus: ExtensionBus::new(),
                registry: ComponentRegistry::new(),
                config: RwLock::new(config),
                applied: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Rebuilds a handle around already-shared state.
    pub(crate) fn from_shared(shared: Arc<RuntimeInner>) -> Self {
        Self { shared }
    }

    /// Returns a clone of the shared state for embedding in instances.
    pub(crate) fn shared(&self) -> Arc<RuntimeInner> {
        Arc::clone(&self.shared)
    }

    /// Returns the runtime's extension bus.
    #[must_use]
    pub fn bus(&self) -> &ExtensionBus<Instance> {
        &self.shared.bus
    }

    /// Returns the runtime's component registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.shared.registry
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> RuntimeConfig {
        self.shared.config.read().clone()
    }

    /// Replaces the configuration.
    ///
    /// Takes effect immediately; derived display names of already-mounted
    /// instances reflect the new root namespace on their next query.
    pub fn set_config(&self, config: RuntimeConfig) {
        *self.shared.config.write() = config;
    }

    /// Adds one feature or a whole feature group to the runtime.
    ///
    /// Features are applied immediately, in order. Application order is
    /// meaningful: it fixes handler registration order on the bus, and a
    /// later feature's claims override an earlier one's.
    pub fn add_features(&mut self, features: impl Features) -> &mut Self {
        features.add_to_runtime(self);
        self
    }

    /// Applies a boxed feature: records its name, then builds it.
    pub(crate) fn add_boxed_feature(&mut self, feature: Box<dyn Feature>) {
        self.shared.applied.write().push(feature.name().to_owned());
        feature.build(self);
    }

    /// Lists applied feature names, in application order.
    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        self.shared.applied.read().clone()
    }

    /// Mounts a component, producing an instance with a fresh id.
    #[must_use]
    pub fn mount(&self, component: impl Component) -> Instance {
        let mut instance = Instance::new(component, self);
        instance.set_id(InstanceId::new());
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Widget;

    impl Component for Widget {}

    #[test]
    fn default_runtime_has_empty_config() {
        let runtime = Runtime::new();

        assert_eq!(runtime.config(), RuntimeConfig::default());
        assert!(runtime.feature_names().is_empty());
    }

    #[test]
    fn with_config_snapshot_round_trips() {
        let config = RuntimeConfig::new().with_root_namespace("app");
        let runtime = Runtime::with_config(config.clone());

        assert_eq!(runtime.config(), config);
    }

    #[test]
    fn set_config_reshapes_existing_instance_names() {
        let runtime = Runtime::new();
        let instance = runtime.mount(Widget);
        let long_name = instance.name();

        runtime.set_config(
            RuntimeConfig::new().with_root_namespace("trellis_component::runtime::tests"),
        );

        assert_ne!(instance.name(), long_name);
        assert_eq!(instance.name(), "widget");
    }

    #[test]
    fn clones_share_bus_and_registry() {
        let runtime = Runtime::new();
        let clone = runtime.clone();

        clone.bus().on_attribute("shared", |_, name, claim| {
            if name == "marker" {
                claim.set(json!(true));
            }
            Ok(())
        });

        let mut instance = runtime.mount(Widget);
        assert_eq!(instance.get("marker").expect("claimed"), json!(true));
    }

    #[test]
    fn instances_reach_their_runtime() {
        let runtime = Runtime::new();
        let instance = runtime.mount(Widget);

        instance
            .runtime()
            .registry()
            .register_alias(instance.type_path(), "widgets.primary");

        assert_eq!(instance.name(), "widgets.primary");
    }
}
