use super::{InstrumentationScope, LogRecord, Logger, LoggerProvider, Severity};

/// Provider whose loggers drop every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLoggerProvider;

impl NoopLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for NoopLoggerProvider {
    fn logger_with_scope(&self, _scope: InstrumentationScope) -> Box<dyn Logger> {
        Box::new(NoopLogger)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn emit(&self, _record: LogRecord) {}

    fn enabled(&self, _severity: Option<Severity>) -> bool {
        false
    }
}
