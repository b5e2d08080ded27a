//! Redirect feature.
//!
//! Provides [`RedirectsFeature`], which lets a component request a redirect
//! during a behavior and lets the outer shell read the pending target back,
//! either through the `redirect` attribute or the typed
//! [`redirect_target`] accessor.

use serde_json::{Value, json};
use trellis_component::feature::Feature;
use trellis_component::instance::Instance;
use trellis_component::runtime::Runtime;

/// Store key holding the pending redirect target.
const REDIRECT_KEY: &str = "redirect";

/// Errors raised while requesting a redirect.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    /// `redirect` was called without a target.
    #[error("redirect requires a target url as its first argument")]
    MissingUrl,

    /// The target argument was not a string.
    #[error("redirect target must be a string, got {0}")]
    InvalidUrl(Value),
}

/// Redirect requests for components.
///
/// Registers two handlers:
///
/// - A behavior handler claiming `redirect` calls, which records the target
///   on the instance's store and resolves to the target itself.
/// - An attribute handler claiming `redirect` reads once a target is
///   pending; before any request, the attribute resolves like any other
///   unknown attribute.
pub struct RedirectsFeature;

impl Feature for RedirectsFeature {
    fn build(&self, runtime: &mut Runtime) {
        runtime
            .bus()
            .on_behavior("redirects", |instance: &mut Instance, name, args, claim| {
                if name != "redirect" {
                    return Ok(());
                }

                let url = match args.first() {
                    None => return Err(RedirectError::MissingUrl.into()),
                    Some(Value::String(url)) => url.clone(),
                    Some(other) => return Err(RedirectError::InvalidUrl(other.clone()).into()),
                };

                tracing::debug!(url = %url, component = %instance.name(), "redirect requested");
                instance.store_mut().set(REDIRECT_KEY, json!(url));
                claim.set(json!(url));
                Ok(())
            });

        runtime
            .bus()
            .on_attribute("redirects", |instance: &mut Instance, name, claim| {
                if name == "redirect"
                    && let Some(target) = instance.store().get(REDIRECT_KEY)
                {
                    claim.set(target.clone());
                }
                Ok(())
            });
    }
}

/// Returns the pending redirect target, if one was requested.
#[must_use]
pub fn redirect_target(instance: &Instance) -> Option<String> {
    instance
        .store()
        .get(REDIRECT_KEY)
        .and_then(Value::as_str)
        .map(str::to_owned)
}
