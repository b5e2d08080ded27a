//! Feature system for extensible runtimes.
//!
//! Features are the fundamental unit of composition in Trellis. Every
//! capability a component gains beyond its own struct fields is delivered
//! by a feature registering handlers on the runtime's bus.
//!
//! # Philosophy
//!
//! **Everything is a feature.** There is no built-in resolution behavior
//! that users cannot replace, extend, or disable. The runtime is just a
//! feature orchestrator, and because handler order is registration order, a
//! feature added later can override anything added before it.
//!
//! # Example
//!
//! ```
//! use trellis_component::feature::Feature;
//! use trellis_component::runtime::Runtime;
//! use serde_json::json;
//!
//! struct ErrorBagFeature;
//!
//! impl Feature for ErrorBagFeature {
//!     fn build(&self, runtime: &mut Runtime) {
//!         runtime.bus().on_attribute("error-bag", |_, name, claim| {
//!             if name == "errors" {
//!                 claim.set(json!([]));
//!             }
//!             Ok(())
//!         });
//!     }
//! }
//!
//! let mut runtime = Runtime::new();
//! runtime.add_features(ErrorBagFeature);
//! ```

use crate::runtime::Runtime;

// ─────────────────────────────────────────────────────────────────────────────
// Feature Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A collection of handlers, aliases, and configuration that extends a
/// runtime.
///
/// A feature's [`build`](Feature::build) runs once, at the moment the
/// feature is added. Handlers it registers stay on the bus for the life of
/// the runtime.
pub trait Feature: Send + Sync + 'static {
    /// Configures the runtime. Called once when the feature is added.
    ///
    /// Use this to:
    /// - Register attribute and behavior handlers on the bus
    /// - Register display-name aliases
    /// - Add sub-features via `runtime.add_features()`
    fn build(&self, runtime: &mut Runtime);

    /// Returns the feature's name for debugging and group reordering.
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Features Trait (for add_features polymorphism)
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for types that can be added to a runtime as features.
///
/// This trait enables `runtime.add_features()` to accept both:
/// - Single features implementing [`Feature`]
/// - Feature groups via [`FeatureGroupBuilder`]
///
/// Users typically don't implement this trait directly.
pub trait Features {
    /// Adds these features to the runtime.
    fn add_to_runtime(self, runtime: &mut Runtime);
}

/// Single features implement `Features` directly.
impl<F: Feature> Features for F {
    fn add_to_runtime(self, runtime: &mut Runtime) {
        runtime.add_boxed_feature(Box::new(self));
    }
}

/// `FeatureGroupBuilder` implements `Features` to add all contained
/// features, in group order.
impl Features for FeatureGroupBuilder {
    fn add_to_runtime(self, runtime: &mut Runtime) {
        for feature in self.features {
            runtime.add_boxed_feature(feature);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FeatureGroup Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A collection of features that can be added together.
///
/// Feature groups provide a convenient way to bundle related features.
/// Users can customize the group before adding it to the runtime.
///
/// # Example
///
/// ```ignore
/// pub struct DefaultFeatures;
///
/// impl FeatureGroup for DefaultFeatures {
///     fn build(self) -> FeatureGroupBuilder {
///         FeatureGroupBuilder::new()
///             .add(TraceFeature::default())
///             .add(EventsFeature)
///             .add(RedirectsFeature)
///     }
/// }
///
/// // Use with customization
/// let mut runtime = Runtime::new();
/// runtime.add_features(
///     DefaultFeatures
///         .build()
///         .disable::<TraceFeature>()
///         .add(CustomTraceFeature::new()),
/// );
/// ```
pub trait FeatureGroup {
    /// Returns the features in this group.
    fn build(self) -> FeatureGroupBuilder;
}

// ─────────────────────────────────────────────────────────────────────────────
// FeatureGroupBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for customizing feature groups.
///
/// Allows adding, removing, and reordering features within a group. Order
/// matters: it becomes handler registration order on the bus, which is the
/// override order for claims.
#[derive(Default)]
pub struct FeatureGroupBuilder {
    /// The features in this group, in order.
    pub(crate) features: Vec<Box<dyn Feature>>,
}

impl FeatureGroupBuilder {
    /// Creates a new empty feature group builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Adds a feature to the end of the group.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "This is a builder method, not std::ops::Add"
    )]
    pub fn add<F: Feature>(mut self, feature: F) -> Self {
        self.features.push(Box::new(feature));
        self
    }

    /// Adds a feature before another feature in the group.
    ///
    /// If `Target` is not found, the feature is added at the beginning.
    ///
    /// # Type Parameters
    ///
    /// - `F`: The feature to add
    /// - `Target`: The feature to insert before
    #[must_use]
    pub fn add_before<F: Feature, Target: Feature>(mut self, feature: F) -> Self {
        let target_name = core::any::type_name::<Target>();
        let position = self
            .features
            .iter()
            .position(|f| f.name() == target_name)
            .unwrap_or(0);
        self.features.insert(position, Box::new(feature));
        self
    }

    /// Adds a feature after another feature in the group.
    ///
    /// If `Target` is not found, the feature is added at the end.
    ///
    /// # Type Parameters
    ///
    /// - `F`: The feature to add
    /// - `Target`: The feature to insert after
    #[must_use]
    pub fn add_after<F: Feature, Target: Feature>(mut self, feature: F) -> Self {
        let target_name = core::any::type_name::<Target>();
        let position = self
            .features
            .iter()
            .position(|f| f.name() == target_name)
            .map(|i| i + 1)
            .unwrap_or(self.features.len());
        self.features.insert(position, Box::new(feature));
        self
    }

    /// Removes a feature from the group by type.
    ///
    /// If the feature is not found, this is a no-op.
    #[must_use]
    pub fn disable<F: Feature>(mut self) -> Self {
        let target_name = core::any::type_name::<F>();
        self.features.retain(|f| f.name() != target_name);
        self
    }

    /// Returns the number of features in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the group contains no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
