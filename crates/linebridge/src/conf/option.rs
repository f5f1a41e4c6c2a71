//! Option — functional construction options and logger resolution.

use std::fmt;
use std::sync::Arc;

use crate::logs::{InstrumentationScope, Logger, LoggerProvider, NoopLoggerProvider, SharedProvider};
use crate::parser::FieldParser;

/// Accessor for the provider used when no option supplies one.
///
/// Passed explicitly to the resolver; [`crate::logs::global::logger_provider`]
/// is the usual choice.
pub type DefaultProvider = fn() -> SharedProvider;

/// Construction-time configuration of a [`crate::LineBridge`].
#[derive(Clone, Default)]
pub struct BridgeConfig {
    pub provider: Option<SharedProvider>,
    /// Instrumentation version; empty means unset.
    pub version: String,
    /// Semantic-convention schema URL; empty means unset.
    pub schema_url: String,
    pub parser: Option<Arc<dyn FieldParser>>,
    pub diagnostics: bool,
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("provider", &self.provider.as_ref().map(|_| "<provider>"))
            .field("version", &self.version)
            .field("schema_url", &self.schema_url)
            .field("parser", &self.parser.as_ref().map(|_| "<parser>"))
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

/// A single configuration mutator.
pub struct BridgeOption(Box<dyn FnOnce(BridgeConfig) -> BridgeConfig + Send>);

impl BridgeOption {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(BridgeConfig) -> BridgeConfig + Send + 'static,
    {
        Self(Box::new(f))
    }

    pub fn apply(self, config: BridgeConfig) -> BridgeConfig {
        (self.0)(config)
    }
}

impl fmt::Debug for BridgeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BridgeOption")
    }
}

/// Version of the package doing the logging.
pub fn with_version(version: impl Into<String>) -> BridgeOption {
    let version = version.into();
    BridgeOption::new(move |mut c| {
        c.version = version;
        c
    })
}

/// Schema URL for the semantic conventions used in emitted records.
pub fn with_schema_url(schema_url: impl Into<String>) -> BridgeOption {
    let schema_url = schema_url.into();
    BridgeOption::new(move |mut c| {
        c.schema_url = schema_url;
        c
    })
}

/// Provider used to create the bridge's logger. Without it the default
/// provider accessor is consulted.
pub fn with_logger_provider(provider: SharedProvider) -> BridgeOption {
    BridgeOption::new(move |mut c| {
        c.provider = Some(provider);
        c
    })
}

/// Replace the default time-of-day field parser.
pub fn with_parser(parser: Arc<dyn FieldParser>) -> BridgeOption {
    BridgeOption::new(move |mut c| {
        c.parser = Some(parser);
        c
    })
}

/// Log each received chunk and parsed timestamp as DEBUG events.
pub fn with_diagnostics(enabled: bool) -> BridgeOption {
    BridgeOption::new(move |mut c| {
        c.diagnostics = enabled;
        c
    })
}

impl BridgeConfig {
    /// Fold `options` left to right, then fill an unset provider from
    /// `default_provider`. Later options win.
    pub fn from_options<I>(options: I, default_provider: DefaultProvider) -> Self
    where
        I: IntoIterator<Item = BridgeOption>,
    {
        let mut config = options
            .into_iter()
            .fold(BridgeConfig::default(), |c, opt| opt.apply(c));

        if config.provider.is_none() {
            config.provider = Some(default_provider());
        }

        config
    }

    /// Scope the bridge's logger is requested under.
    pub fn scope(&self, name: &str) -> InstrumentationScope {
        let mut builder = InstrumentationScope::builder(name);
        if !self.version.is_empty() {
            builder = builder.with_version(self.version.clone());
        }
        if !self.schema_url.is_empty() {
            builder = builder.with_schema_url(self.schema_url.clone());
        }
        builder.build()
    }

    pub fn logger(&self, name: &str) -> Box<dyn Logger> {
        let scope = self.scope(name);
        match &self.provider {
            Some(provider) => provider.logger_with_scope(scope),
            None => NoopLoggerProvider::new().logger_with_scope(scope),
        }
    }
}
