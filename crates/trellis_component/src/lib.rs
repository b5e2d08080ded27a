//! Component model for Trellis (Layer 2).
//!
//! `trellis_component` wraps user components with runtime-managed identity,
//! display naming, and open member resolution. Attribute reads and behavior
//! calls that a component cannot satisfy directly are arbitrated by features
//! through the extension bus from `trellis_dispatch`.
//!
//! # Core Concepts
//!
//! - [`Component`] - User-defined state managed by a runtime
//! - [`Instance`] - A mounted component with identity and storage
//! - [`Runtime`] - Shared bus, registry, and configuration
//! - [`Feature`] - The unit of composition; registers handlers at build time
//! - [`ComponentRegistry`] - Alias bookkeeping and display-name resolution
//!
//! # Example
//!
//! ```
//! use trellis_component::prelude::*;
//! use serde_json::json;
//!
//! struct Counter {
//!     count: i64,
//! }
//!
//! impl Component for Counter {}
//!
//! struct CounterFeature;
//!
//! impl Feature for CounterFeature {
//!     fn build(&self, runtime: &mut Runtime) {
//!         runtime
//!             .bus()
//!             .on_attribute("counter", |instance: &mut Instance, name, claim| {
//!                 if name == "count"
//!                     && let Some(counter) = instance.component_as::<Counter>()
//!                 {
//!                     claim.set(json!(counter.count));
//!                 }
//!                 Ok(())
//!             });
//!     }
//! }
//!
//! let mut runtime = Runtime::new();
//! runtime.add_features(CounterFeature);
//!
//! let mut counter = runtime.mount(Counter { count: 41 });
//! assert_eq!(counter.get("count")?, json!(41));
//! # Ok::<(), ComponentError>(())
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 2 of the Trellis architecture:
//!
//! - **Layer 1** (`trellis_dispatch`): Handler dispatch primitives
//! - **Layer 2** (`trellis_component`): Component model (this crate)
//! - **Layer 3** (`trellis_features`): Bundled features built on the lower layers

/// Ad-hoc behavior table.
pub mod adhoc;

/// The component trait.
pub mod component;

/// Runtime configuration.
pub mod config;

/// Error types for the component model.
pub mod error;

/// Feature system for extensible runtimes.
pub mod feature;

/// Mounted component instances.
pub mod instance;

/// Display-name derivation for component types.
pub mod naming;

/// Component registry.
pub mod registry;

/// The component runtime.
pub mod runtime;

/// Per-instance keyed storage.
pub mod store;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::adhoc::{AdhocBehaviors, BehaviorFn};
    pub use crate::component::Component;
    pub use crate::config::RuntimeConfig;
    pub use crate::error::ComponentError;
    pub use crate::feature::{Feature, FeatureGroup, FeatureGroupBuilder, Features};
    pub use crate::instance::{Instance, InstanceId};
    pub use crate::naming::{AliasTable, derive_name};
    pub use crate::registry::ComponentRegistry;
    pub use crate::runtime::Runtime;
    pub use crate::store::{DataStore, StoreError};
}

// Re-export key types at crate root for convenience
pub use component::Component;
pub use error::ComponentError;
pub use feature::{Feature, FeatureGroup, FeatureGroupBuilder, Features};
pub use instance::{Instance, InstanceId};
pub use runtime::Runtime;
