//! Display-name derivation for component types.
//!
//! Every component type has a display name used in errors, logs, and
//! user-facing tooling. The name comes from one of two sources:
//!
//! 1. **Alias** - an explicitly registered name, returned verbatim with no
//!    normalization whatsoever. An alias is an operator decision; mangling
//!    it would defeat its purpose.
//! 2. **Derivation** - a kebab-cased dotted path computed from the type
//!    path, with the configured root namespace stripped off the front.
//!
//! Derivation is pure and deterministic: the same inputs always produce the
//! same name, and nothing here caches results.

use hashbrown::HashMap;
use heck::ToKebabCase;

// ─────────────────────────────────────────────────────────────────────────────
// AliasTable
// ─────────────────────────────────────────────────────────────────────────────

/// Mapping from component type paths to explicitly registered display names.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    /// Maps type path to its registered alias.
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty alias table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias for a type path, replacing any previous alias.
    pub fn insert(&mut self, type_path: impl Into<String>, alias: impl Into<String>) {
        self.entries.insert(type_path.into(), alias.into());
    }

    /// Looks up the alias for a type path.
    #[must_use]
    pub fn get(&self, type_path: &str) -> Option<&str> {
        self.entries.get(type_path).map(String::as_str)
    }

    /// Checks if a type path has a registered alias.
    #[must_use]
    pub fn contains(&self, type_path: &str) -> bool {
        self.entries.contains_key(type_path)
    }

    /// Lists the type paths that have registered aliases.
    #[must_use]
    pub fn type_paths(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns the number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Name derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Derives the display name for a component type path.
///
/// If `aliases` holds an entry for `type_path`, the alias is returned
/// verbatim. Otherwise both the type path and `namespace` are normalized to
/// kebab-cased dotted form, and the namespace is stripped from the front of
/// the path when it matches as a whole-segment prefix. An empty namespace
/// strips nothing, and a namespace that does not match (or matches only part
/// of a segment) leaves the full path intact.
///
/// # Example
///
/// ```
/// use trellis_component::naming::{AliasTable, derive_name};
///
/// let aliases = AliasTable::new();
/// assert_eq!(
///     derive_name("app::admin::UserIndex", &aliases, "app"),
///     "admin.user-index"
/// );
/// ```
#[must_use]
pub fn derive_name(type_path: &str, aliases: &AliasTable, namespace: &str) -> String {
    if let Some(alias) = aliases.get(type_path) {
        return alias.to_owned();
    }

    let full = kebab_path(type_path);
    if namespace.is_empty() {
        return full;
    }

    let prefix = kebab_path(namespace);
    match full
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        Some(rest) => rest.to_owned(),
        None => full,
    }
}

/// Normalizes a type path to kebab-cased dotted form.
///
/// `::`, `/`, and `\` all count as segment separators. Empty segments are
/// dropped, and each remaining segment is kebab-cased independently.
fn kebab_path(path: &str) -> String {
    path.replace("::", ".")
        .replace(['/', '\\'], ".")
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_kebab_case())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_is_returned_verbatim() {
        let mut aliases = AliasTable::new();
        aliases.insert("app::admin::UserIndex", "Admin.Dashboard");

        assert_eq!(
            derive_name("app::admin::UserIndex", &aliases, "app"),
            "Admin.Dashboard",
            "aliases should bypass normalization entirely"
        );
    }

    #[test]
    fn alias_replaces_previous_registration() {
        let mut aliases = AliasTable::new();
        aliases.insert("app::Widget", "first");
        aliases.insert("app::Widget", "second");

        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("app::Widget"), Some("second"));
    }

    #[test]
    fn dotted_path_with_namespace_stripped() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name(
                "App.Http.Livewire.Admin.UserIndex",
                &aliases,
                "App.Http.Livewire"
            ),
            "admin.user-index"
        );
    }

    #[test]
    fn empty_namespace_keeps_full_path() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("App.Http.Livewire.UserIndex", &aliases, ""),
            "app.http.livewire.user-index"
        );
    }

    #[test]
    fn rust_path_separators_are_normalized() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("my_app::admin::UserIndex", &aliases, "my_app"),
            "admin.user-index"
        );
    }

    #[test]
    fn slash_and_backslash_separators_are_normalized() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("App/Http/UserIndex", &aliases, ""),
            "app.http.user-index"
        );
        assert_eq!(
            derive_name("App\\Http\\UserIndex", &aliases, ""),
            "app.http.user-index"
        );
    }

    #[test]
    fn non_matching_namespace_is_ignored() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("App.Other.UserIndex", &aliases, "App.Http"),
            "app.other.user-index"
        );
    }

    #[test]
    fn partial_segment_namespace_does_not_strip() {
        let aliases = AliasTable::new();

        // "app.htt" is a string prefix of "app.http.user-index" but not a
        // whole-segment prefix, so nothing is stripped.
        assert_eq!(
            derive_name("App.Http.UserIndex", &aliases, "App.Htt"),
            "app.http.user-index"
        );
    }

    #[test]
    fn namespace_equal_to_whole_path_is_not_stripped() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("App.Http.UserIndex", &aliases, "App.Http.UserIndex"),
            "app.http.user-index"
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name(".App..Http.UserIndex.", &aliases, ""),
            "app.http.user-index"
        );
    }

    #[test]
    fn multiword_segments_are_kebab_cased() {
        let aliases = AliasTable::new();

        assert_eq!(
            derive_name("App.HTTPServer.UserIndexTable", &aliases, "App"),
            "http-server.user-index-table"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let aliases = AliasTable::new();

        let first = derive_name("App.Http.UserIndex", &aliases, "App");
        let second = derive_name("App.Http.UserIndex", &aliases, "App");
        assert_eq!(first, second);
    }
}
