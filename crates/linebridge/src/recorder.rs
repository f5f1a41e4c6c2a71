//! Recorder — in-memory logger provider.
//!
//! Captures every record emitted through its loggers, grouped by
//! instrumentation scope. Useful for unit-testing code that writes through a
//! [`crate::LineBridge`] without a real logging backend.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::logs::{InstrumentationScope, LogRecord, Logger, LoggerProvider};

/// Records captured for one instrumentation scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeRecords {
    pub scope: InstrumentationScope,
    pub records: Vec<LogRecord>,
}

/// Mutable inner state protected by a mutex.
#[derive(Debug, Default)]
struct Inner {
    scopes: Vec<ScopeRecords>,
}

impl Inner {
    /// Index of `scope`, inserting an empty entry on first sight.
    fn slot(&mut self, scope: InstrumentationScope) -> usize {
        if let Some(idx) = self.scopes.iter().position(|s| s.scope == scope) {
            return idx;
        }
        self.scopes.push(ScopeRecords {
            scope,
            records: Vec::new(),
        });
        self.scopes.len() - 1
    }
}

#[derive(Debug, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Inner>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every scope and its records, in creation order.
    pub fn result(&self) -> Vec<ScopeRecords> {
        self.inner.lock().scopes.clone()
    }

    /// All records across scopes, in scope order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.inner
            .lock()
            .scopes
            .iter()
            .flat_map(|s| s.records.iter().cloned())
            .collect()
    }

    /// Drop captured records. Scopes stay registered.
    pub fn reset(&self) {
        for scope in self.inner.lock().scopes.iter_mut() {
            scope.records.clear();
        }
    }
}

impl LoggerProvider for Recorder {
    fn logger_with_scope(&self, scope: InstrumentationScope) -> Box<dyn Logger> {
        let slot = self.inner.lock().slot(scope);
        Box::new(RecordingLogger {
            inner: Arc::clone(&self.inner),
            slot,
        })
    }
}

struct RecordingLogger {
    inner: Arc<Mutex<Inner>>,
    slot: usize,
}

impl Logger for RecordingLogger {
    fn emit(&self, record: LogRecord) {
        let mut inner = self.inner.lock();
        if let Some(scope) = inner.scopes.get_mut(self.slot) {
            scope.records.push(record);
        }
    }
}
