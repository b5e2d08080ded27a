//! The component trait.

use downcast_rs::{Downcast, impl_downcast};

/// A user-defined component managed by a [`Runtime`](crate::runtime::Runtime).
///
/// Components carry domain state and nothing else; identity, naming, and
/// member resolution live on the wrapping
/// [`Instance`](crate::instance::Instance). Feature handlers downcast the
/// boxed component back to its concrete type to read or mutate that state.
///
/// # Example
///
/// ```
/// use trellis_component::component::Component;
///
/// struct Counter {
///     count: i64,
/// }
///
/// impl Component for Counter {}
/// ```
pub trait Component: Downcast + Send + Sync {
    /// Stable type path used for alias lookup and display-name derivation.
    ///
    /// Defaults to [`core::any::type_name`], which is stable enough for
    /// in-process use but not guaranteed across compiler versions; override
    /// it when names must survive persistence.
    fn type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl_downcast!(Component);
