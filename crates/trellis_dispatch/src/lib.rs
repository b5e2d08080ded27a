//! Ordered extension-handler dispatch primitives for Trellis (Layer 1).
//!
//! `trellis_dispatch` provides the arbitration core used whenever a component
//! member access cannot be satisfied directly: independent handlers compete,
//! in registration order, to claim a value for the access.
//!
//! # Core Concepts
//!
//! - [`ExtensionBus`] - Handler registry with two-phase dispatch
//! - [`Hook`] - The extension points handlers attach to
//! - [`MemberAccess`] - Description of the access being resolved
//! - [`Claim`] - Single-slot, last-write-wins value holder
//! - [`Finish`] - Outcome of a trigger phase, resolved against a default
//!
//! # Example
//!
//! ```
//! use trellis_dispatch::ExtensionBus;
//! use serde_json::json;
//!
//! let bus: ExtensionBus<()> = ExtensionBus::new();
//! bus.on_attribute("defaults", |_subject, name, claim| {
//!     if name == "greeting" {
//!         claim.set(json!("hello"));
//!     }
//!     Ok(())
//! });
//!
//! let finish = bus.trigger_attribute(&mut (), "greeting")?;
//! assert_eq!(finish.resolve(json!(null)), json!("hello"));
//! # Ok::<(), trellis_dispatch::HandlerError>(())
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 1 of the Trellis architecture:
//!
//! - **Layer 1** (`trellis_dispatch`): Handler dispatch primitives (this crate)
//! - **Layer 2** (`trellis_component`): Component model (identity, naming, resolution)
//! - **Layer 3** (`trellis_features`): Bundled features built on the lower layers

/// Member access descriptors.
pub mod access;

/// Handler registration and two-phase dispatch.
pub mod bus;

/// Claim slot and trigger-phase outcome.
pub mod claim;

/// Dispatch error types.
pub mod error;

/// Extension points handlers attach to.
pub mod hook;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::access::MemberAccess;
    pub use crate::bus::{BoxedHandler, ExtensionBus};
    pub use crate::claim::{Claim, Finish};
    pub use crate::error::{BoxError, HandlerError};
    pub use crate::hook::Hook;
}

// Re-export key types at crate root for convenience
pub use access::MemberAccess;
pub use bus::{BoxedHandler, ExtensionBus};
pub use claim::{Claim, Finish};
pub use error::{BoxError, HandlerError};
pub use hook::Hook;
