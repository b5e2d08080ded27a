//! Example counter CLI.
//!
//! Mounts a [`Counter`] on a runtime carrying the default feature bundle and
//! walks it through a short session: attribute reads, increments, an event
//! dispatch, and a redirect.
//!
//! # Usage
//!
//! ```bash
//! counter [initial_count]
//! ```
//!
//! # Example
//!
//! ```bash
//! counter 40
//! ```

use example::{Counter, CounterFeature};
use serde_json::json;
use trellis_component::{FeatureGroup, Runtime};
use trellis_features::{DefaultFeatures, dispatched_events, redirect_target};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let initial = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Usage: counter [initial_count]");
            eprintln!("Example: counter 40");
            std::process::exit(1);
        }),
        None => 0,
    };

    // Initialize the runtime with the bundled features plus our own
    let mut runtime = Runtime::new();
    runtime
        .add_features(DefaultFeatures.build())
        .add_features(CounterFeature);

    let mut counter = runtime.mount(Counter::new(initial));
    tracing::info!(name = %counter.name(), "mounted counter");

    println!("[Mounted] {}", counter.name());

    match counter.get("count") {
        Ok(count) => println!("[Read] count = {count}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    // Increment twice: once by the configured step, once by an explicit 10
    for args in [vec![], vec![json!(10)]] {
        match counter.call("increment", &args) {
            Ok(count) => println!("[Increment] count = {count}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    // Dispatch an event; the events feature records it on the instance
    if let Err(e) = counter.call(
        "dispatch",
        &[json!("counter-changed"), json!({ "source": "cli" })],
    ) {
        eprintln!("Error: {e}");
    }
    for event in dispatched_events(&counter) {
        println!("[Event] {} {}", event.name, event.payload);
    }

    // Ask for a redirect and read the target back
    if let Err(e) = counter.call("redirect", &[json!("/counters")]) {
        eprintln!("Error: {e}");
    }
    if let Some(target) = redirect_target(&counter) {
        println!("[Redirect] {target}");
    }

    // A member nothing claims surfaces as a resolution error
    if let Err(e) = counter.get("velocity") {
        println!("[Miss] {e}");
    }
}
