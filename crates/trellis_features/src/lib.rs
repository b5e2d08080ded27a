//! Bundled features for Trellis runtimes (Layer 3).
//!
//! This crate provides the features most Trellis applications compose:
//!
//! - [`EventsFeature`] - Event dispatch with a per-instance event log
//! - [`RedirectsFeature`] - Redirect requests readable by the outer shell
//! - [`SkipRenderFeature`] - Per-cycle render opt-out
//! - [`TraceFeature`] - Logging and observability via the `tracing` crate
//! - [`DefaultFeatures`] - Convenient bundle of all of the above
//!
//! # Example
//!
//! ```
//! use trellis_component::prelude::*;
//! use trellis_features::DefaultFeatures;
//! use serde_json::json;
//!
//! struct Form;
//! impl Component for Form {}
//!
//! let mut runtime = Runtime::new();
//! runtime.add_features(DefaultFeatures.build());
//!
//! let mut form = runtime.mount(Form);
//! form.call("dispatch", &[json!("saved")])?;
//! form.call("redirect", &[json!("/done")])?;
//! # Ok::<(), ComponentError>(())
//! ```
//!
//! # Individual Feature Usage
//!
//! For fine-grained control, add features individually:
//!
//! ```
//! use trellis_component::prelude::*;
//! use trellis_features::{EventsFeature, TraceFeature};
//! use tracing::Level;
//!
//! let mut runtime = Runtime::new();
//! runtime
//!     .add_features(TraceFeature::default().with_level(Level::DEBUG))
//!     .add_features(EventsFeature);
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 3 of the Trellis architecture:
//!
//! - **Layer 1** (`trellis_dispatch`): Handler dispatch primitives
//! - **Layer 2** (`trellis_component`): Component model
//! - **Layer 3** (`trellis_features`): Bundled features (this crate)

mod events;
mod redirects;
mod render;
mod trace;

// Re-export features
pub use events::{DispatchedEvent, EventError, EventsFeature, dispatched_events};
pub use redirects::{RedirectError, RedirectsFeature, redirect_target};
pub use render::{SkipRenderFeature, render_skipped};
pub use trace::{TraceFeature, TraceFormat};

use trellis_component::feature::{FeatureGroup, FeatureGroupBuilder};

/// Default features for most Trellis applications.
///
/// Includes:
/// - [`TraceFeature`] - Logging and observability
/// - [`EventsFeature`] - Event dispatch
/// - [`RedirectsFeature`] - Redirect requests
/// - [`SkipRenderFeature`] - Render opt-out
///
/// # Example
///
/// ```
/// use trellis_component::prelude::*;
/// use trellis_features::DefaultFeatures;
///
/// let mut runtime = Runtime::new();
/// runtime.add_features(DefaultFeatures.build());
/// ```
///
/// # Customization
///
/// Use the builder pattern to customize:
///
/// ```
/// use trellis_component::prelude::*;
/// use trellis_features::{DefaultFeatures, TraceFeature};
///
/// let mut runtime = Runtime::new();
/// runtime.add_features(DefaultFeatures.build().disable::<TraceFeature>());
/// ```
pub struct DefaultFeatures;

impl FeatureGroup for DefaultFeatures {
    fn build(self) -> FeatureGroupBuilder {
        FeatureGroupBuilder::new()
            .add(TraceFeature::default())
            .add(EventsFeature)
            .add(RedirectsFeature)
            .add(SkipRenderFeature)
    }
}

/// Minimal features for headless or testing scenarios.
///
/// Includes only:
/// - [`EventsFeature`] - Event dispatch
/// - [`RedirectsFeature`] - Redirect requests
/// - [`SkipRenderFeature`] - Render opt-out
///
/// Does not include tracing, making it suitable for unit tests
/// that don't need logging output.
pub struct MinimalFeatures;

impl FeatureGroup for MinimalFeatures {
    fn build(self) -> FeatureGroupBuilder {
        FeatureGroupBuilder::new()
            .add(EventsFeature)
            .add(RedirectsFeature)
            .add(SkipRenderFeature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_component::component::Component;
    use trellis_component::runtime::Runtime;

    struct Form;

    impl Component for Form {}

    #[test]
    fn default_features_builds() {
        let builder = DefaultFeatures.build();
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn minimal_features_builds() {
        let builder = MinimalFeatures.build();
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn runtime_with_minimal_features() {
        let mut runtime = Runtime::new();
        runtime.add_features(MinimalFeatures.build());

        let mut form = runtime.mount(Form);
        form.call("dispatch", &[serde_json::json!("ready")])
            .expect("dispatch resolves");

        assert_eq!(dispatched_events(&form).len(), 1);
        assert!(!render_skipped(&form));
    }
}
