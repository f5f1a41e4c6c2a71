use std::fmt;
use std::io;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::debug;

use super::stats::{BridgeStats, StatsSnapshot};
use crate::conf::{BridgeConfig, BridgeOption, DefaultProvider};
use crate::error::BridgeError;
use crate::logs::{global, Logger};
use crate::parser::{FieldParser, TimeOfDayParser};

/// `tracing` target for the optional chunk/timestamp diagnostics.
pub const DIAGNOSTICS_TARGET: &str = "linebridge::diagnostics";

/// Attribute holding the original bytes of a chunk that was not valid UTF-8.
pub const RAW_ATTRIBUTE: &str = "log.raw";

/// Byte sink that turns rendered log lines into structured records.
///
/// The logger is resolved once in the constructor and never replaced.
/// Writes take `&self`; share one bridge between writers with `Arc`.
///
/// ```rust,ignore
/// let bridge = LineBridge::new("billing", [with_version("1.2.0")]);
/// writeln!(&bridge, "12:00:01 INFO invoice sent")?;
/// ```
pub struct LineBridge {
    name: String,
    logger: Box<dyn Logger>,
    parser: Arc<dyn FieldParser>,
    diagnostics: bool,
    stats: BridgeStats,
}

impl LineBridge {
    /// Build a bridge whose logger falls back to the process default
    /// provider ([`global::logger_provider`]).
    pub fn new<I>(name: &str, options: I) -> Self
    where
        I: IntoIterator<Item = BridgeOption>,
    {
        Self::with_default_provider(name, global::logger_provider, options)
    }

    /// Build a bridge with an explicit fallback provider accessor.
    pub fn with_default_provider<I>(name: &str, default_provider: DefaultProvider, options: I) -> Self
    where
        I: IntoIterator<Item = BridgeOption>,
    {
        let config = BridgeConfig::from_options(options, default_provider);
        Self::from_config(name, config)
    }

    pub fn from_config(name: &str, config: BridgeConfig) -> Self {
        let logger = config.logger(name);
        let parser = config
            .parser
            .unwrap_or_else(|| Arc::new(TimeOfDayParser::new()));

        Self {
            name: name.to_string(),
            logger,
            parser,
            diagnostics: config.diagnostics,
            stats: BridgeStats::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Parse `chunk` and emit one record per recognised stamp.
    ///
    /// Returns `chunk.len()` on success. On a parse failure nothing from the
    /// chunk is emitted.
    pub fn write_chunk(&self, chunk: &[u8]) -> Result<usize, BridgeError> {
        self.stats.record_chunk(chunk.len());

        let text = String::from_utf8_lossy(chunk);
        if self.diagnostics {
            debug!(target: DIAGNOSTICS_TARGET, bridge = %self.name, chunk = %text, "received chunk");
        }

        let partials = self.parser.parse_fields(&text).map_err(|e| {
            self.stats.record_parse_error();
            if self.diagnostics {
                debug!(target: DIAGNOSTICS_TARGET, bridge = %self.name, error = %e, "chunk rejected");
            }
            e
        })?;

        // Lossy decoding replaced something; keep the original bytes.
        let raw = std::str::from_utf8(chunk)
            .is_err()
            .then(|| Bytes::copy_from_slice(chunk));

        let observed = Utc::now();
        for partial in partials {
            if self.diagnostics {
                debug!(
                    target: DIAGNOSTICS_TARGET,
                    bridge = %self.name,
                    time_text = %partial.time_text,
                    timestamp = ?partial.timestamp,
                    "parsed timestamp"
                );
            }

            let mut record = partial.into_record(observed);
            if let Some(raw) = &raw {
                record.add_attribute(RAW_ATTRIBUTE, raw.clone());
            }
            if !self.logger.enabled(record.severity_number) {
                continue;
            }
            self.logger.emit(record);
            self.stats.record_emit();
        }

        Ok(chunk.len())
    }
}

impl io::Write for &LineBridge {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_chunk(buf).map_err(io::Error::from)
    }

    /// Render the whole line before parsing. The default implementation
    /// writes each format piece separately, which splits stamps.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let line = fmt::format(args);
        self.write_chunk(line.as_bytes())
            .map(|_| ())
            .map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for LineBridge {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, buf)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        io::Write::write_fmt(&mut &*self, args)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
