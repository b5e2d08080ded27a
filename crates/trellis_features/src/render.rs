//! Render-skipping feature.
//!
//! Provides [`SkipRenderFeature`], which lets a component opt out of the
//! shell's render pass for the current cycle. The flag lives on the
//! instance's store; shells check it with [`render_skipped`] before
//! rendering.

use serde_json::{Value, json};
use trellis_component::feature::Feature;
use trellis_component::instance::Instance;
use trellis_component::runtime::Runtime;

/// Store key holding the skip flag.
const SKIP_RENDER_KEY: &str = "skip_render";

/// Render opt-out for components.
///
/// Registers a behavior handler claiming `skip_render` calls. The call
/// resolves to `null` and raises the instance's skip flag.
pub struct SkipRenderFeature;

impl Feature for SkipRenderFeature {
    fn build(&self, runtime: &mut Runtime) {
        runtime
            .bus()
            .on_behavior("render", |instance: &mut Instance, name, _args, claim| {
                if name != "skip_render" {
                    return Ok(());
                }

                tracing::debug!(component = %instance.name(), "render skipped");
                instance.store_mut().set(SKIP_RENDER_KEY, json!(true));
                claim.set(Value::Null);
                Ok(())
            });
    }
}

/// Checks if the instance opted out of rendering.
#[must_use]
pub fn render_skipped(instance: &Instance) -> bool {
    instance
        .store()
        .get(SKIP_RENDER_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_component::component::Component;

    struct Page;

    impl Component for Page {}

    #[test]
    fn rendering_is_on_by_default() {
        let mut runtime = Runtime::new();
        runtime.add_features(SkipRenderFeature);
        let page = runtime.mount(Page);

        assert!(!render_skipped(&page));
    }

    #[test]
    fn skip_render_raises_the_flag_and_returns_null() {
        let mut runtime = Runtime::new();
        runtime.add_features(SkipRenderFeature);
        let mut page = runtime.mount(Page);

        let result = page.call("skip_render", &[]).expect("skip resolves");

        assert_eq!(result, Value::Null);
        assert!(render_skipped(&page));
    }

    #[test]
    fn skip_flag_is_instance_local() {
        let mut runtime = Runtime::new();
        runtime.add_features(SkipRenderFeature);
        let mut first = runtime.mount(Page);
        let second = runtime.mount(Page);

        first.call("skip_render", &[]).expect("skip resolves");

        assert!(render_skipped(&first));
        assert!(!render_skipped(&second));
    }
}
