//! Example counter component built with Trellis.
//!
//! This example demonstrates how member resolution flows through the
//! extension bus. The counter itself is a plain struct; [`CounterFeature`]
//! exposes its fields as attributes and its mutations as behaviors, and the
//! bundled runtime features layer events and redirects on top.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Resolution flow for instance.call("increment", args)        │
//! │                                                              │
//! │  ┌──────────────┐   ┌───────────────┐   ┌────────────────┐   │
//! │  │ TraceFeature │──▶│ EventsFeature │──▶│ CounterFeature │   │
//! │  └──────────────┘   └───────────────┘   └───────┬────────┘   │
//! │    (observes)         (declines)                │            │
//! │                                                 ▼            │
//! │                                        claims the new tally  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use serde_json::{Value, json};
use trellis_component::{Component, Feature, Instance, Runtime};

/// A tally with a configurable step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    /// Current tally.
    pub count: i64,
    /// Amount added by an `increment` call that passes no argument.
    pub step: i64,
}

impl Counter {
    /// Creates a counter starting at `count`, stepping by one.
    #[must_use]
    pub fn new(count: i64) -> Self {
        Self { count, step: 1 }
    }
}

impl Component for Counter {}

/// Exposes [`Counter`] state through the resolution facade.
///
/// Attributes: `count` and `step`. Behaviors: `increment` (adds the step,
/// or an explicit first argument, and returns the new tally) and `reset`
/// (zeroes the tally and returns nothing).
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFeature;

impl Feature for CounterFeature {
    fn build(&self, runtime: &mut Runtime) {
        runtime
            .bus()
            .on_attribute("counter", |instance: &mut Instance, attribute, claim| {
                if let Some(counter) = instance.component_as::<Counter>() {
                    match attribute {
                        "count" => claim.set(json!(counter.count)),
                        "step" => claim.set(json!(counter.step)),
                        _ => {}
                    }
                }
                Ok(())
            })
            .on_behavior(
                "counter",
                |instance: &mut Instance, behavior, args, claim| {
                    let Some(counter) = instance.component_as_mut::<Counter>() else {
                        return Ok(());
                    };
                    match behavior {
                        "increment" => {
                            let step =
                                args.first().and_then(Value::as_i64).unwrap_or(counter.step);
                            counter.count += step;
                            claim.set(json!(counter.count));
                        }
                        "reset" => {
                            counter.count = 0;
                            claim.set(Value::Null);
                        }
                        _ => {}
                    }
                    Ok(())
                },
            );

        runtime.registry().register_alias(
            core::any::type_name::<Counter>(),
            "counters.example-counter",
        );
    }
}
