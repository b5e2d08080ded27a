//! Error types for handler dispatch.

use crate::hook::Hook;

/// Boxed error type handlers may fail with.
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Failure raised by an extension handler during a resolution.
///
/// The originating error is preserved via [`source`](core::error::Error::source);
/// dispatch stops at the failing handler and the remaining chain is not
/// invoked for that resolution.
#[derive(Debug, thiserror::Error)]
#[error("handler '{handler}' failed during {hook}")]
pub struct HandlerError {
    /// Name the handler was registered under.
    pub handler: String,
    /// The hook being dispatched when the failure occurred.
    pub hook: Hook,
    /// The handler's own error.
    #[source]
    pub source: BoxError,
}
