//! Bridge — the line-to-record adapter.
//!
//! [`LineBridge`] is an `io::Write` sink. Every chunk written to it is run
//! through a [`crate::parser::FieldParser`] and each resulting record is
//! emitted through the logger bound at construction.

pub mod stats;
pub mod writer;

pub use stats::{BridgeStats, StatsSnapshot};
pub use writer::{LineBridge, DIAGNOSTICS_TARGET, RAW_ATTRIBUTE};
