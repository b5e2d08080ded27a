//! Error types for the component model.

use trellis_dispatch::{BoxError, HandlerError};

/// Errors surfaced by instance identity and member resolution.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// The instance id was read before one was assigned.
    #[error("component id accessed before one was assigned")]
    IdentityNotSet,

    /// No handler claimed the requested attribute.
    #[error("attribute '{attribute}' not found on component '{component}'")]
    AttributeNotFound {
        /// The attribute that failed to resolve.
        attribute: String,
        /// Display name of the owning component.
        component: String,
    },

    /// No handler and no ad-hoc behavior claimed the requested behavior.
    #[error("behavior '{behavior}' does not exist on component '{component_type}'")]
    UnknownBehavior {
        /// Type path of the owning component.
        component_type: String,
        /// The behavior that failed to resolve.
        behavior: String,
    },

    /// A handler failed during resolution.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// An ad-hoc behavior ran but returned an error.
    #[error("behavior '{behavior}' failed")]
    BehaviorFailed {
        /// The behavior that failed.
        behavior: String,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
}
