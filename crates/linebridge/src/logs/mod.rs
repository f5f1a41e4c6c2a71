//! Structured logging capability API.
//!
//! The bridge never stores or exports records itself. It reaches a backend
//! through two small capabilities:
//!
//! - [`LoggerProvider`]: hands out loggers bound to an [`InstrumentationScope`]
//! - [`Logger`]: accepts [`LogRecord`]s
//!
//! Backends (SDKs, exporters, test recorders) implement these traits.

mod noop;
mod record;
mod scope;
pub mod global;

use std::sync::Arc;

pub use noop::{NoopLogger, NoopLoggerProvider};
pub use record::{AnyValue, LogRecord, Severity};
pub use scope::{InstrumentationScope, ScopeBuilder};

/// Shared, type-erased provider handle.
pub type SharedProvider = Arc<dyn LoggerProvider>;

pub trait Logger: Send + Sync {
    /// Emit a record. Delivery failures are the backend's concern.
    fn emit(&self, record: LogRecord);

    /// Whether a record of the given severity would be kept.
    fn enabled(&self, _severity: Option<Severity>) -> bool {
        true
    }
}

pub trait LoggerProvider: Send + Sync {
    fn logger_with_scope(&self, scope: InstrumentationScope) -> Box<dyn Logger>;

    /// Logger for a bare scope name.
    fn logger(&self, name: &str) -> Box<dyn Logger> {
        self.logger_with_scope(InstrumentationScope::builder(name).build())
    }
}

impl<P: LoggerProvider + ?Sized> LoggerProvider for Arc<P> {
    fn logger_with_scope(&self, scope: InstrumentationScope) -> Box<dyn Logger> {
        (**self).logger_with_scope(scope)
    }
}
