//! Event dispatch feature.
//!
//! Provides [`EventsFeature`], which gives every component a `dispatch`
//! behavior. Dispatched events are recorded on the instance's store so that
//! an outer shell (a test harness, a transport layer) can drain them after
//! the component has run.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use trellis_component::feature::Feature;
use trellis_component::instance::Instance;
use trellis_component::runtime::Runtime;

/// Store key under which dispatched events accumulate.
const DISPATCHED_KEY: &str = "dispatched";

// ─────────────────────────────────────────────────────────────────────────────
// EventError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while dispatching an event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// `dispatch` was called without an event name.
    #[error("dispatch requires an event name as its first argument")]
    MissingEventName,

    /// The event name argument was not a string.
    #[error("event name must be a string, got {0}")]
    InvalidEventName(Value),
}

// ─────────────────────────────────────────────────────────────────────────────
// DispatchedEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded event dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    /// The event name.
    pub name: String,
    /// The payload passed alongside the name, `null` when omitted.
    #[serde(default)]
    pub payload: Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// EventsFeature
// ─────────────────────────────────────────────────────────────────────────────

/// Event dispatch for components.
///
/// Registers a behavior handler claiming `dispatch` calls:
///
/// - `args[0]` - event name (required, string)
/// - `args[1]` - payload (optional, any JSON value)
///
/// Each dispatch appends to the instance's event log and resolves to
/// `null`; use [`dispatched_events`] to read the log back in order.
///
/// # Example
///
/// ```
/// use trellis_component::prelude::*;
/// use trellis_features::{EventsFeature, dispatched_events};
/// use serde_json::json;
///
/// struct Form;
/// impl Component for Form {}
///
/// let mut runtime = Runtime::new();
/// runtime.add_features(EventsFeature);
///
/// let mut form = runtime.mount(Form);
/// form.call("dispatch", &[json!("saved"), json!({"draft": false})])?;
///
/// assert_eq!(dispatched_events(&form)[0].name, "saved");
/// # Ok::<(), ComponentError>(())
/// ```
pub struct EventsFeature;

impl Feature for EventsFeature {
    fn build(&self, runtime: &mut Runtime) {
        runtime
            .bus()
            .on_behavior("events", |instance: &mut Instance, name, args, claim| {
                if name != "dispatch" {
                    return Ok(());
                }

                let event = match args.first() {
                    None => return Err(EventError::MissingEventName.into()),
                    Some(Value::String(event)) => event.clone(),
                    Some(other) => return Err(EventError::InvalidEventName(other.clone()).into()),
                };
                let payload = args.get(1).cloned().unwrap_or(Value::Null);

                tracing::debug!(event = %event, component = %instance.name(), "event dispatched");
                instance
                    .store_mut()
                    .push(DISPATCHED_KEY, json!({ "name": event, "payload": payload }))?;
                claim.set(Value::Null);
                Ok(())
            });
    }
}

/// Returns the events dispatched on an instance so far, in dispatch order.
#[must_use]
pub fn dispatched_events(instance: &Instance) -> Vec<DispatchedEvent> {
    instance
        .store()
        .get(DISPATCHED_KEY)
        .cloned()
        .and_then(|log| serde_json::from_value(log).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_component::component::Component;
    use trellis_component::error::ComponentError;

    struct Form;

    impl Component for Form {}

    fn runtime_with_events() -> Runtime {
        let mut runtime = Runtime::new();
        runtime.add_features(EventsFeature);
        runtime
    }

    #[test]
    fn dispatch_records_the_event_and_returns_null() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        let result = form
            .call("dispatch", &[json!("saved"), json!({"id": 7})])
            .expect("dispatch resolves");

        assert_eq!(result, Value::Null);
        assert_eq!(
            dispatched_events(&form),
            vec![DispatchedEvent {
                name: "saved".to_owned(),
                payload: json!({"id": 7}),
            }]
        );
    }

    #[test]
    fn payload_defaults_to_null() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        form.call("dispatch", &[json!("pinged")])
            .expect("dispatch resolves");

        assert_eq!(dispatched_events(&form)[0].payload, Value::Null);
    }

    #[test]
    fn dispatches_accumulate_in_order() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        for event in ["first", "second", "third"] {
            form.call("dispatch", &[json!(event)])
                .expect("dispatch resolves");
        }

        let names: Vec<_> = dispatched_events(&form)
            .into_iter()
            .map(|event| event.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn no_dispatches_reads_as_empty() {
        let runtime = runtime_with_events();
        let form = runtime.mount(Form);

        assert!(dispatched_events(&form).is_empty());
    }

    #[test]
    fn dispatch_without_a_name_fails() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        let err = form.call("dispatch", &[]).expect_err("name is required");
        match err {
            ComponentError::Handler(inner) => {
                assert_eq!(
                    inner.source.to_string(),
                    "dispatch requires an event name as its first argument"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dispatch_with_non_string_name_fails() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        let err = form
            .call("dispatch", &[json!(42)])
            .expect_err("name must be a string");
        assert!(err.to_string().contains("events"));
    }

    #[test]
    fn dispatch_onto_a_clobbered_log_errors_instead_of_panicking() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);
        form.store_mut().set(DISPATCHED_KEY, json!(1));

        let err = form
            .call("dispatch", &[json!("saved")])
            .expect_err("the log key holds a non-array");
        match err {
            ComponentError::Handler(inner) => {
                assert_eq!(
                    inner.source.to_string(),
                    "store entry 'dispatched' is not an array"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn other_behaviors_are_left_alone() {
        let runtime = runtime_with_events();
        let mut form = runtime.mount(Form);

        assert!(matches!(
            form.call("unrelated", &[]),
            Err(ComponentError::UnknownBehavior { .. })
        ));
    }
}
