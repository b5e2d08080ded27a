//! # Trellis Internal Library
//!
//! Re-exports the core Trellis crates for convenience.

/// Layer 1: Handler dispatch primitives.
pub use trellis_dispatch;

/// Layer 2: Component model.
pub use trellis_component;

/// Layer 3: Bundled features.
pub use trellis_features;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use trellis_component::prelude::*;
    pub use trellis_dispatch::prelude::*;
    pub use trellis_features::{
        DefaultFeatures, DispatchedEvent, EventsFeature, MinimalFeatures, RedirectsFeature,
        SkipRenderFeature, TraceFeature, TraceFormat, dispatched_events, redirect_target,
        render_skipped,
    };
}
