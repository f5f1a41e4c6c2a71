use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity numbers of the structured log data model (1..=24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

impl Severity {
    /// Short name as it appears in `severity_text`.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Trace2 => "TRACE2",
            Severity::Trace3 => "TRACE3",
            Severity::Trace4 => "TRACE4",
            Severity::Debug => "DEBUG",
            Severity::Debug2 => "DEBUG2",
            Severity::Debug3 => "DEBUG3",
            Severity::Debug4 => "DEBUG4",
            Severity::Info => "INFO",
            Severity::Info2 => "INFO2",
            Severity::Info3 => "INFO3",
            Severity::Info4 => "INFO4",
            Severity::Warn => "WARN",
            Severity::Warn2 => "WARN2",
            Severity::Warn3 => "WARN3",
            Severity::Warn4 => "WARN4",
            Severity::Error => "ERROR",
            Severity::Error2 => "ERROR2",
            Severity::Error3 => "ERROR3",
            Severity::Error4 => "ERROR4",
            Severity::Fatal => "FATAL",
            Severity::Fatal2 => "FATAL2",
            Severity::Fatal3 => "FATAL3",
            Severity::Fatal4 => "FATAL4",
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Map a conventional level word to a severity.
    ///
    /// Accepts the spellings line loggers commonly print (`WARNING`, `ERR`,
    /// `CRIT`, ...). Matching is case-insensitive.
    pub fn from_level_text(text: &str) -> Option<Self> {
        let severity = match text.to_ascii_uppercase().as_str() {
            "TRACE" | "TRC" => Severity::Trace,
            "DEBUG" | "DBG" => Severity::Debug,
            "INFO" | "INF" => Severity::Info,
            "NOTICE" => Severity::Info2,
            "WARN" | "WARNING" | "WRN" => Severity::Warn,
            "ERROR" | "ERR" => Severity::Error,
            "CRITICAL" | "CRIT" => Severity::Error3,
            "ALERT" => Severity::Fatal,
            "FATAL" | "PANIC" | "EMERGENCY" | "EMERG" => Severity::Fatal,
            _ => return None,
        };
        Some(severity)
    }
}

/// Value of a record body or attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyValue {
    String(String),
    Int(i64),
    Double(f64),
    Boolean(bool),
    #[serde(serialize_with = "serialize_bytes")]
    Bytes(Bytes),
    List(Vec<AnyValue>),
    Map(BTreeMap<String, AnyValue>),
}

fn serialize_bytes<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_bytes(bytes)
}

impl AnyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::String(value)
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::String(value.to_string())
    }
}

impl From<i64> for AnyValue {
    fn from(value: i64) -> Self {
        AnyValue::Int(value)
    }
}

impl From<f64> for AnyValue {
    fn from(value: f64) -> Self {
        AnyValue::Double(value)
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Boolean(value)
    }
}

impl From<Bytes> for AnyValue {
    fn from(value: Bytes) -> Self {
        AnyValue::Bytes(value)
    }
}

/// A single structured log event handed to a [`super::Logger`].
///
/// Records are values in transit: built per emission and moved into the
/// logger, never retained by the producer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogRecord {
    /// Time the event occurred, as reported by the source line.
    pub timestamp: Option<DateTime<Utc>>,

    /// Time the event was observed by the bridge.
    pub observed_timestamp: Option<DateTime<Utc>>,

    pub severity_number: Option<Severity>,
    pub severity_text: Option<String>,
    pub body: Option<AnyValue>,
    pub attributes: Vec<(String, AnyValue)>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = Some(timestamp);
    }

    pub fn set_observed_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.observed_timestamp = Some(timestamp);
    }

    pub fn set_severity(&mut self, severity: Severity, text: impl Into<String>) {
        self.severity_number = Some(severity);
        self.severity_text = Some(text.into());
    }

    pub fn set_body(&mut self, body: impl Into<AnyValue>) {
        self.body = Some(body.into());
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<AnyValue>) {
        self.attributes.push((key.into(), value.into()));
    }

    /// First attribute value stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&AnyValue> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
