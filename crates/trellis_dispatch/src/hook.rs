//! Hook identifiers for member resolution.
//!
//! A hook names the extension point a handler is registered against. There
//! are exactly two: one for attribute reads and one for behavior calls.
//! Handler lists are kept per hook, so registering under one hook never
//! affects dispatch on the other.

use core::fmt;

/// Named extension point that handlers register against.
///
/// Registration order within a hook is significant: handlers are invoked in
/// the order they were added, and a later handler's claim overrides an
/// earlier one's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Resolution of an attribute read that no declared field satisfied.
    ResolveAttribute,
    /// Resolution of a behavior call that no declared method satisfied.
    ResolveBehavior,
}

impl Hook {
    /// Returns the hook's wire name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Hook::ResolveAttribute => "resolve-attribute",
            Hook::ResolveBehavior => "resolve-behavior",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_names() {
        assert_eq!(Hook::ResolveAttribute.name(), "resolve-attribute");
        assert_eq!(Hook::ResolveBehavior.name(), "resolve-behavior");
    }

    #[test]
    fn hook_display_matches_name() {
        assert_eq!(Hook::ResolveAttribute.to_string(), "resolve-attribute");
        assert_eq!(Hook::ResolveBehavior.to_string(), "resolve-behavior");
    }

    #[test]
    fn hooks_are_distinct_map_keys() {
        let mut map = hashbrown::HashMap::new();
        map.insert(Hook::ResolveAttribute, 1);
        map.insert(Hook::ResolveBehavior, 2);
        assert_eq!(map[&Hook::ResolveAttribute], 1);
        assert_eq!(map[&Hook::ResolveBehavior], 2);
    }
}
