//! Claim slot and finisher for the two-phase resolution protocol.
//!
//! During the trigger phase every handler receives the same [`Claim`], a
//! mutable single-slot holder. Writing it records a candidate result;
//! declining leaves it untouched. The slot deliberately implements
//! last-write-wins: each claim silently replaces the previous candidate, so
//! later-registered handlers can override earlier ones.
//!
//! The trigger phase returns a [`Finish`]. Resolving it with a default
//! answers the second half of the protocol: the claimed candidate if any
//! handler claimed, otherwise the default unchanged. Keeping the two phases
//! separate lets callers decide their own no-claim policy (fail, fall
//! through to another table, substitute a default) without the dispatch
//! layer encoding any of those.
//!
//! "Unclaimed" is represented by the slot being empty, never by a marker
//! value. A handler that claims `Value::Null` has still claimed, and the
//! finisher will return `Null` rather than the default.

use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Claim
// ─────────────────────────────────────────────────────────────────────────────

/// Single-slot candidate holder passed to each handler during the trigger
/// phase.
#[derive(Debug, Default)]
pub struct Claim {
    value: Option<Value>,
}

impl Claim {
    /// Creates an empty claim slot.
    #[must_use]
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Records `value` as the candidate result, replacing any earlier claim.
    pub fn set(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Returns true if some handler has claimed a value so far.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Consumes the slot, yielding the claimed value if any.
    pub(crate) fn into_value(self) -> Option<Value> {
        self.value
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Finish
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of the trigger phase, awaiting the caller's no-claim policy.
#[must_use = "a Finish carries the resolution outcome and must be resolved or inspected"]
#[derive(Debug)]
pub struct Finish {
    claimed: Option<Value>,
}

impl Finish {
    pub(crate) fn new(claimed: Option<Value>) -> Self {
        Self { claimed }
    }

    /// Returns the claimed value, or `default` unchanged if no handler
    /// claimed one.
    pub fn resolve(self, default: Value) -> Value {
        self.claimed.unwrap_or(default)
    }

    /// Returns the claimed value, if any handler claimed one.
    pub fn claimed(self) -> Option<Value> {
        self.claimed
    }

    /// Returns true if some handler claimed a value.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn claim_starts_empty() {
        let claim = Claim::new();
        assert!(!claim.is_set());
        assert_eq!(claim.into_value(), None);
    }

    #[test]
    fn claim_records_value() {
        let mut claim = Claim::new();
        claim.set(json!(42));
        assert!(claim.is_set());
        assert_eq!(claim.into_value(), Some(json!(42)));
    }

    #[test]
    fn later_claim_replaces_earlier() {
        let mut claim = Claim::new();
        claim.set(json!("first"));
        claim.set(json!("second"));
        assert_eq!(claim.into_value(), Some(json!("second")));
    }

    #[test]
    fn finish_resolve_returns_claimed_value() {
        let finish = Finish::new(Some(json!("claimed")));
        assert_eq!(finish.resolve(json!("default")), json!("claimed"));
    }

    #[test]
    fn finish_resolve_returns_default_unchanged_when_unclaimed() {
        let finish = Finish::new(None);
        let default = json!({"nested": [1, 2, 3]});
        assert_eq!(finish.resolve(default.clone()), default);
    }

    #[test]
    fn claimed_null_is_not_unclaimed() {
        // An explicit null claim must win over the default.
        let finish = Finish::new(Some(Value::Null));
        assert!(finish.is_claimed());
        assert_eq!(finish.resolve(json!("default")), Value::Null);
    }

    #[test]
    fn finish_claimed_exposes_slot() {
        assert_eq!(Finish::new(Some(json!(1))).claimed(), Some(json!(1)));
        assert_eq!(Finish::new(None).claimed(), None);
    }
}
