//! Member access descriptors passed to handlers.
//!
//! Every handler receives the same [`MemberAccess`] describing the resolution
//! in flight, mirroring how a unified event type carries context to hooks.
//! Handlers registered through the typed registration methods only ever see
//! the variant matching their hook; handlers registered through
//! [`register_boxed`](crate::bus::ExtensionBus::register_boxed) should match
//! and ignore the variants they do not care about.

use serde_json::Value;

use crate::hook::Hook;

/// The member access a resolution is trying to satisfy.
#[derive(Debug, Clone, Copy)]
pub enum MemberAccess<'a> {
    /// Read of an attribute the subject does not declare.
    Attribute {
        /// The requested attribute name.
        name: &'a str,
    },
    /// Call of a behavior the subject does not declare.
    Behavior {
        /// The requested behavior name.
        name: &'a str,
        /// Arguments the caller supplied for the behavior.
        args: &'a [Value],
    },
}

impl MemberAccess<'_> {
    /// Returns the hook this access dispatches on.
    #[must_use]
    pub fn hook(&self) -> Hook {
        match self {
            MemberAccess::Attribute { .. } => Hook::ResolveAttribute,
            MemberAccess::Behavior { .. } => Hook::ResolveBehavior,
        }
    }

    /// Returns the requested member name.
    #[must_use]
    pub fn member(&self) -> &str {
        match self {
            MemberAccess::Attribute { name } | MemberAccess::Behavior { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_access_dispatches_on_attribute_hook() {
        let access = MemberAccess::Attribute { name: "count" };
        assert_eq!(access.hook(), Hook::ResolveAttribute);
        assert_eq!(access.member(), "count");
    }

    #[test]
    fn behavior_access_dispatches_on_behavior_hook() {
        let args = vec![Value::from(1)];
        let access = MemberAccess::Behavior {
            name: "increment",
            args: &args,
        };
        assert_eq!(access.hook(), Hook::ResolveBehavior);
        assert_eq!(access.member(), "increment");
    }
}
