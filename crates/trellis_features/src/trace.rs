//! Tracing and observability feature.
//!
//! Provides [`TraceFeature`], which configures the `tracing` subscriber and
//! registers observer handlers that log every resolution without ever
//! claiming one. Because observers decline, where the feature sits in the
//! composition order has no effect on resolution outcomes.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trellis_component::feature::Feature;
use trellis_component::instance::Instance;
use trellis_component::runtime::Runtime;

// ─────────────────────────────────────────────────────────────────────────────
// TraceFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Trace output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TraceFeature
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing and logging feature.
///
/// Configures the `tracing` subscriber and logs every attribute and
/// behavior resolution at `TRACE` level. Uses the [`tracing`] and
/// [`tracing_subscriber`] crates under the hood.
///
/// # Example
///
/// ```
/// use trellis_component::prelude::*;
/// use trellis_features::{TraceFeature, TraceFormat};
/// use tracing::Level;
///
/// let mut runtime = Runtime::new();
/// runtime.add_features(
///     TraceFeature::default()
///         .with_level(Level::DEBUG)
///         .with_format(TraceFormat::Pretty),
/// );
/// ```
///
/// # Configuration Options
///
/// ```
/// use trellis_features::{TraceFeature, TraceFormat};
/// use tracing::Level;
///
/// // Development: Pretty colored output with debug level
/// let dev_feature = TraceFeature::default()
///     .with_level(Level::DEBUG)
///     .with_format(TraceFormat::Pretty)
///     .with_span_events(true);  // Show span enter/exit
///
/// // Production: JSON output for log aggregation
/// let prod_feature = TraceFeature::default()
///     .with_level(Level::INFO)
///     .with_format(TraceFormat::Json)
///     .with_env_filter("trellis=info,hyper=warn");
/// ```
#[derive(Clone)]
pub struct TraceFeature {
    /// Maximum log level.
    level: Level,
    /// Output format.
    format: TraceFormat,
    /// Environment filter (e.g., "trellis=debug,hyper=warn").
    env_filter: Option<String>,
    /// Whether to include span events (enter/exit).
    span_events: bool,
}

impl Default for TraceFeature {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TraceFormat::Pretty,
            env_filter: None,
            span_events: false,
        }
    }
}

impl TraceFeature {
    /// Creates a new `TraceFeature` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TraceFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a custom environment filter string.
    ///
    /// Format: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Installs the configured `tracing` subscriber.
    ///
    /// `try_init().ok()` tolerates an already-installed subscriber, so
    /// composing the feature into several runtimes (or under a test
    /// harness's own subscriber) is safe.
    fn init_subscriber(&self) {
        let env_filter = match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        };

        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        match self.format {
            TraceFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            TraceFormat::Compact => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            TraceFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
        }
    }
}

impl Feature for TraceFeature {
    fn build(&self, runtime: &mut Runtime) {
        self.init_subscriber();

        runtime
            .bus()
            .on_attribute("trace", |instance: &mut Instance, name, _claim| {
                tracing::trace!(
                    component = %instance.name(),
                    attribute = %name,
                    "resolving attribute"
                );
                Ok(())
            });

        runtime
            .bus()
            .on_behavior("trace", |instance: &mut Instance, name, args, _claim| {
                tracing::trace!(
                    component = %instance.name(),
                    behavior = %name,
                    args = args.len(),
                    "resolving behavior"
                );
                Ok(())
            });

        tracing::info!(
            level = %self.level,
            format = ?self.format,
            "TraceFeature initialized"
        );
    }
}
