//! Runtime configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Runtime`](crate::runtime::Runtime).
///
/// Deserializes from JSON with every field optional, so partial config
/// files work out of the box.
///
/// # Example
///
/// ```
/// use trellis_component::config::RuntimeConfig;
///
/// let config = RuntimeConfig::new().with_root_namespace("my_app::components");
/// assert_eq!(config.root_namespace, "my_app::components");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Root namespace stripped from the front of derived component display
    /// names. Empty means no stripping.
    pub root_namespace: String,
}

impl RuntimeConfig {
    /// Creates a config with defaults: empty root namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root namespace.
    #[must_use]
    pub fn with_root_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.root_namespace = namespace.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespace_is_empty() {
        assert_eq!(RuntimeConfig::new().root_namespace, "");
    }

    #[test]
    fn builder_sets_namespace() {
        let config = RuntimeConfig::new().with_root_namespace("app");
        assert_eq!(config.root_namespace, "app");
    }

    #[test]
    fn deserializes_from_empty_object() {
        let config: RuntimeConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn deserializes_configured_namespace() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"root_namespace": "app::pages"}"#).expect("valid config");
        assert_eq!(config.root_namespace, "app::pages");
    }
}
