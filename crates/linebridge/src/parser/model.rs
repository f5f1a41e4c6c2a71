use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::logs::{LogRecord, Severity};

/// Attribute key for text found on the line before the time stamp.
pub const PREFIX_ATTRIBUTE: &str = "log.prefix";

/// Attribute key for the matched time stamp text.
pub const TIME_TEXT_ATTRIBUTE: &str = "log.time_text";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid time pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to parse timestamp {text:?}: {source}")]
    Timestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Fields extracted for a single record, before it is handed to a logger.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRecord {
    /// The stamp exactly as it appeared in the text (e.g. `15:04:05`).
    pub time_text: String,

    /// Stamp anchored to a calendar date.
    pub timestamp: Option<DateTime<Utc>>,

    pub severity: Option<Severity>,

    /// Level word as written (`INFO`, `warning`, ...).
    pub level: Option<String>,

    /// Message text following the stamp (and level, if any).
    pub body: Option<String>,

    /// Text before the stamp on the same line (e.g. `logger:`).
    pub prefix: Option<String>,

    /// Additional key/value pairs.
    pub fields: Vec<(String, String)>,
}

impl PartialRecord {
    pub fn new(time_text: impl Into<String>) -> Self {
        Self {
            time_text: time_text.into(),
            timestamp: None,
            severity: None,
            level: None,
            body: None,
            prefix: None,
            fields: Vec::new(),
        }
    }

    /// Build the record that is actually emitted.
    pub fn into_record(self, observed: DateTime<Utc>) -> LogRecord {
        let mut record = LogRecord::new();
        record.set_observed_timestamp(observed);

        if let Some(ts) = self.timestamp {
            record.set_timestamp(ts);
        }
        if let Some(severity) = self.severity {
            let text = self.level.unwrap_or_else(|| severity.name().to_string());
            record.set_severity(severity, text);
        }
        if let Some(body) = self.body {
            record.set_body(body);
        }
        if let Some(prefix) = self.prefix {
            record.add_attribute(PREFIX_ATTRIBUTE, prefix);
        }
        record.add_attribute(TIME_TEXT_ATTRIBUTE, self.time_text);
        for (key, value) in self.fields {
            record.add_attribute(key, value);
        }

        record
    }
}
