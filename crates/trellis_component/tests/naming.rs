//! Integration tests for display-name derivation.
//!
//! The inline unit tests pin the exact vectors; these tests check the shape
//! of the algorithm over generated inputs instead:
//!
//! - **Form**: derived names are lowercase kebab segments joined by single
//!   dots, one output segment per input segment.
//! - **Separator insensitivity**: `::`, `.`, and `/` spellings of the same
//!   path derive the same name.
//! - **Strip equivalence**: deriving under a whole-segment namespace equals
//!   deriving the tail alone.
//! - **Alias precedence**: a registered alias is returned verbatim no matter
//!   what the namespace would have done to the path.

use trellis_component::naming::{AliasTable, derive_name};

// ═══════════════════════════════════════════════════════════════════════════════
// HAND-WRITTEN CASES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn alias_wins_even_when_namespace_matches() {
    let mut aliases = AliasTable::new();
    aliases.insert("App.Http.Livewire.Admin.UserIndex", "admin-home");

    assert_eq!(
        derive_name(
            "App.Http.Livewire.Admin.UserIndex",
            &aliases,
            "App.Http.Livewire"
        ),
        "admin-home"
    );
}

#[test]
fn deep_namespace_strip_equals_deriving_the_tail() {
    let aliases = AliasTable::new();

    assert_eq!(
        derive_name("App.Http.Livewire.Admin.UserIndex", &aliases, "App.Http"),
        derive_name("Livewire.Admin.UserIndex", &aliases, "")
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTY-BASED TESTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Property-based verification of the naming pipeline over generated paths.
///
/// ## Strategy Design
///
/// Segments are alphanumeric PascalCase-ish words starting with an uppercase
/// letter, so every segment survives kebab-casing as exactly one non-empty
/// output segment. Paths hold 1 to 6 segments; namespaces are whole-segment
/// prefixes chosen by length.
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// Generates a single path segment.
    fn arb_segment() -> impl Strategy<Value = String> {
        "[A-Z][a-zA-Z0-9]{0,7}"
    }

    /// Generates a path as a list of segments.
    fn arb_segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_segment(), 1..=6)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Derived names are dot-joined, lowercase, and keep one output
        /// segment per input segment.
        #[test]
        fn prop_derived_names_are_well_formed(segments in arb_segments()) {
            let aliases = AliasTable::new();
            let derived = derive_name(&segments.join("."), &aliases, "");

            prop_assert!(
                derived
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-'),
                "unexpected character in {derived:?}"
            );
            prop_assert!(!derived.starts_with('.'));
            prop_assert!(!derived.ends_with('.'));
            prop_assert!(!derived.contains(".."));
            prop_assert_eq!(derived.split('.').count(), segments.len());
        }

        /// The same segments spelled with `::`, `.`, or `/` derive the same
        /// name.
        #[test]
        fn prop_separator_spelling_is_irrelevant(segments in arb_segments()) {
            let aliases = AliasTable::new();

            let dotted = derive_name(&segments.join("."), &aliases, "");
            let rusty = derive_name(&segments.join("::"), &aliases, "");
            let slashed = derive_name(&segments.join("/"), &aliases, "");

            prop_assert_eq!(&dotted, &rusty);
            prop_assert_eq!(&dotted, &slashed);
        }

        /// Deriving under a whole-segment namespace prefix equals deriving
        /// the tail segments with no namespace at all.
        #[test]
        fn prop_namespace_strip_equals_tail_derivation(
            prefix in arb_segments(),
            tail in arb_segments(),
        ) {
            let aliases = AliasTable::new();
            let full: Vec<String> = prefix.iter().chain(tail.iter()).cloned().collect();

            prop_assert_eq!(
                derive_name(&full.join("."), &aliases, &prefix.join(".")),
                derive_name(&tail.join("."), &aliases, "")
            );
        }

        /// An alias is returned untouched, whatever the path and namespace.
        #[test]
        fn prop_alias_is_verbatim(
            segments in arb_segments(),
            namespace in arb_segments(),
            alias in "[A-Za-z][A-Za-z0-9 ._-]{0,20}",
        ) {
            let path = segments.join("::");
            let mut aliases = AliasTable::new();
            aliases.insert(path.clone(), alias.clone());

            prop_assert_eq!(
                derive_name(&path, &aliases, &namespace.join(".")),
                alias
            );
        }
    }
}
