//! Handler registration and two-phase dispatch.
//!
//! The [`ExtensionBus`] is the arbitration core: it lets any number of
//! independently developed handlers compete, in a fixed and deterministic
//! order, to supply a value for an otherwise-unresolved attribute read or
//! behavior call.
//!
//! # Protocol
//!
//! A resolution runs in two phases:
//!
//! 1. **Trigger** — every handler registered for the access's hook is
//!    invoked in registration order, synchronously, on the calling stack.
//!    Each receives the subject, the [`MemberAccess`], and the shared
//!    [`Claim`] slot. Writing the slot records a candidate; the last writer
//!    wins. A handler that returns an error aborts the chain immediately.
//! 2. **Finish** — the returned [`Finish`] is resolved by the caller with
//!    its own default, yielding the claimed candidate if any handler
//!    claimed, else the default unchanged.
//!
//! Last-write-wins is deliberate: handlers registered later are expected to
//! be able to override earlier, more generic ones. Do not change this to
//! first-wins.
//!
//! # Example
//!
//! ```
//! use trellis_dispatch::{ExtensionBus, Hook};
//! use serde_json::json;
//!
//! struct Counter {
//!     count: i64,
//! }
//!
//! let bus: ExtensionBus<Counter> = ExtensionBus::new();
//! bus.on_attribute("counter", |subject: &mut Counter, name, claim| {
//!     if name == "count" {
//!         claim.set(json!(subject.count));
//!     }
//!     Ok(())
//! });
//!
//! let mut counter = Counter { count: 3 };
//! let finish = bus.trigger_attribute(&mut counter, "count")?;
//! assert_eq!(finish.claimed(), Some(json!(3)));
//! # Ok::<(), trellis_dispatch::HandlerError>(())
//! ```

use hashbrown::HashMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::access::MemberAccess;
use crate::claim::{Claim, Finish};
use crate::error::{BoxError, HandlerError};
use crate::hook::Hook;

// ─────────────────────────────────────────────────────────────────────────────
// BoxedHandler
// ─────────────────────────────────────────────────────────────────────────────

/// Type-erased handler that receives the subject, the access descriptor, and
/// the claim slot.
///
/// Most users should use [`ExtensionBus::on_attribute`] or
/// [`ExtensionBus::on_behavior`] instead of creating `BoxedHandler` directly.
pub struct BoxedHandler<S> {
    /// The handler function.
    handler: Box<dyn Fn(&mut S, &MemberAccess<'_>, &mut Claim) -> Result<(), BoxError> + Send + Sync>,
}

impl<S> BoxedHandler<S> {
    /// Instantiates a new `BoxedHandler` with the given handler function.
    #[must_use]
    pub fn new(
        handler: impl Fn(&mut S, &MemberAccess<'_>, &mut Claim) -> Result<(), BoxError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Invokes the handler with the given subject, access, and claim slot.
    pub fn invoke(
        &self,
        subject: &mut S,
        access: &MemberAccess<'_>,
        claim: &mut Claim,
    ) -> Result<(), BoxError> {
        (self.handler)(subject, access, claim)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HandlerEntry
// ─────────────────────────────────────────────────────────────────────────────

/// Entry in the handler registry, pairing a name with the handler function.
struct HandlerEntry<S> {
    /// Human-readable name for debugging and error reporting.
    name: String,
    /// The handler function.
    handler: BoxedHandler<S>,
}

// ─────────────────────────────────────────────────────────────────────────────
// ExtensionBus
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of extension handlers with ordered, two-phase dispatch.
///
/// The type parameter `S` is the subject handlers operate on. Handlers get
/// `&mut S`, so they may lazily initialize subject state or record side
/// effects; the bus guarantees ordering, not isolation.
///
/// # Thread Safety
///
/// The registry uses interior mutability via [`RwLock`]: registration takes
/// a write lock, dispatch runs under a read lock. The intended shape is
/// registration at startup and read-mostly dispatch afterwards. Registering
/// from inside a handler deadlocks; register between resolutions instead,
/// which is fully supported since each resolution re-reads the registry.
///
/// # Re-registration
///
/// Registration always appends, even when the name is already taken.
/// The newer entry runs later and its claims override the older one's.
pub struct ExtensionBus<S> {
    /// Maps hook to the handlers registered for it, in registration order.
    handlers: RwLock<HashMap<Hook, Vec<HandlerEntry<S>>>>,
}

impl<S> Default for ExtensionBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ExtensionBus<S> {
    /// Creates a new empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for attribute resolution.
    ///
    /// The handler receives the subject, the requested attribute name, and
    /// the claim slot. Set the slot to claim a value; leave it untouched to
    /// decline and let the next handler (or the caller's no-claim policy)
    /// decide.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_dispatch::ExtensionBus;
    /// use serde_json::json;
    ///
    /// let bus: ExtensionBus<()> = ExtensionBus::new();
    /// bus.on_attribute("defaults", |_subject, name, claim| {
    ///     if name == "errors" {
    ///         claim.set(json!([]));
    ///     }
    ///     Ok(())
    /// });
    /// ```
    pub fn on_attribute<F>(&self, name: impl Into<String>, handler: F) -> &Self
    where
        F: Fn(&mut S, &str, &mut Claim) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.register_boxed(
            Hook::ResolveAttribute,
            name,
            BoxedHandler::new(move |subject, access, claim| match access {
                MemberAccess::Attribute { name } => handler(subject, name, claim),
                MemberAccess::Behavior { .. } => Ok(()),
            }),
        );
        self
    }

    /// Registers a handler for behavior resolution.
    ///
    /// The handler additionally receives the call arguments. Claiming works
    /// exactly as for [`on_attribute`](Self::on_attribute); the claimed
    /// value becomes the behavior's return value.
    pub fn on_behavior<F>(&self, name: impl Into<String>, handler: F) -> &Self
    where
        F: Fn(&mut S, &str, &[Value], &mut Claim) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.register_boxed(
            Hook::ResolveBehavior,
            name,
            BoxedHandler::new(move |subject, access, claim| match access {
                MemberAccess::Behavior { name, args } => handler(subject, name, args, claim),
                MemberAccess::Attribute { .. } => Ok(()),
            }),
        );
        self
    }

    /// Registers a pre-built [`BoxedHandler`] for the given hook.
    ///
    /// This is the lower-level registration method used by both
    /// [`on_attribute`](Self::on_attribute) and
    /// [`on_behavior`](Self::on_behavior). The handler is appended to the
    /// hook's invocation order unconditionally; duplicate names are allowed
    /// and the later entry overrides the earlier one's claims.
    pub fn register_boxed(&self, hook: Hook, name: impl Into<String>, handler: BoxedHandler<S>) {
        let mut handlers = self.handlers.write();
        handlers.entry(hook).or_default().push(HandlerEntry {
            name: name.into(),
            handler,
        });
    }

    /// Runs the trigger phase for an attribute read.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] if a handler fails; the remaining chain is
    /// not invoked.
    pub fn trigger_attribute(&self, subject: &mut S, name: &str) -> Result<Finish, HandlerError> {
        self.trigger(subject, &MemberAccess::Attribute { name })
    }

    /// Runs the trigger phase for a behavior call.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] if a handler fails; the remaining chain is
    /// not invoked.
    pub fn trigger_behavior(
        &self,
        subject: &mut S,
        name: &str,
        args: &[Value],
    ) -> Result<Finish, HandlerError> {
        self.trigger(subject, &MemberAccess::Behavior { name, args })
    }

    /// Runs the trigger phase for the given access.
    ///
    /// Handlers registered for the access's hook run in registration order,
    /// sharing one claim slot. The returned [`Finish`] carries the final
    /// candidate, if any. Each call is an independent run; nothing is cached
    /// across resolutions.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] wrapping the first handler failure. Handlers
    /// after the failing one are not invoked and no [`Finish`] is produced
    /// for the resolution.
    pub fn trigger(
        &self,
        subject: &mut S,
        access: &MemberAccess<'_>,
    ) -> Result<Finish, HandlerError> {
        let hook = access.hook();
        let mut claim = Claim::new();

        let handlers = self.handlers.read();
        if let Some(entries) = handlers.get(&hook) {
            for entry in entries {
                entry
                    .handler
                    .invoke(subject, access, &mut claim)
                    .map_err(|source| HandlerError {
                        handler: entry.name.clone(),
                        hook,
                        source,
                    })?;
            }
        }

        Ok(Finish::new(claim.into_value()))
    }

    /// Returns the number of handlers registered for the given hook.
    #[must_use]
    pub fn handler_count(&self, hook: Hook) -> usize {
        let handlers = self.handlers.read();
        handlers.get(&hook).map_or(0, Vec::len)
    }

    /// Checks if a handler with the given name exists on the hook.
    #[must_use]
    pub fn contains_handler(&self, hook: Hook, name: &str) -> bool {
        let handlers = self.handlers.read();
        handlers
            .get(&hook)
            .is_some_and(|entries| entries.iter().any(|entry| entry.name == name))
    }
}
