//! Component registry.
//!
//! The registry holds the alias table shared by every instance mounted on a
//! runtime and answers display-name queries against it. Names are resolved
//! fresh on every query; registering or changing an alias takes effect for
//! the very next lookup, including on instances mounted earlier.

use parking_lot::RwLock;

use crate::naming::{AliasTable, derive_name};

/// Registry of component aliases with display-name resolution.
///
/// # Thread Safety
///
/// The alias table sits behind an [`RwLock`]: registration takes a write
/// lock, lookups a read lock. Aliases are usually registered while features
/// are composed, but late registration is fully supported.
#[derive(Default)]
pub struct ComponentRegistry {
    /// Registered aliases, shared across the runtime.
    aliases: RwLock<AliasTable>,
}

impl core::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("aliases", &self.aliases.read().type_paths())
            .finish()
    }
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a display-name alias for a component type path, replacing
    /// any previous alias for the same path.
    pub fn register_alias(&self, type_path: impl Into<String>, alias: impl Into<String>) {
        self.aliases.write().insert(type_path, alias);
    }

    /// Returns the alias registered for a type path, if any.
    #[must_use]
    pub fn alias_for(&self, type_path: &str) -> Option<String> {
        self.aliases.read().get(type_path).map(str::to_owned)
    }

    /// Checks if a type path has a registered alias.
    #[must_use]
    pub fn has_alias(&self, type_path: &str) -> bool {
        self.aliases.read().contains(type_path)
    }

    /// Lists the type paths that have registered aliases.
    #[must_use]
    pub fn aliased_type_paths(&self) -> Vec<String> {
        self.aliases.read().type_paths()
    }

    /// Resolves the display name for a type path against the current alias
    /// table and the given root namespace.
    ///
    /// See [`derive_name`] for the derivation rules.
    #[must_use]
    pub fn display_name(&self, type_path: &str, namespace: &str) -> String {
        derive_name(type_path, &self.aliases.read(), namespace)
    }
}
