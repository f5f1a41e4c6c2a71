/// Field extraction from unstructured log text.
///
/// Line loggers hand the bridge fully rendered text. This module turns that
/// text into [`PartialRecord`]s, one per recognised time-of-day stamp.
///
/// # Architecture
///
/// - `traits.rs`: the [`FieldParser`] seam the bridge depends on
/// - `clock.rs`: default parser keyed on `HH:MM:SS` stamps
/// - `anchor.rs`: turns a bare time of day into a full UTC timestamp
/// - `level.rs`: leading level word → severity
/// - `model.rs`: parser output and errors
///
/// The parser is a best-effort heuristic. It has no notion of line
/// boundaries across writes and assumes stamps are UTC.

pub mod traits;
pub mod model;
pub mod clock;
pub mod anchor;
mod level;

pub use traits::FieldParser;
pub use model::{PartialRecord, ParseError};
pub use clock::TimeOfDayParser;
pub use anchor::DateAnchor;

/// Strict 24-hour clock stamp: hours 00-23, minutes and seconds 00-59.
///
/// ASCII digit classes only: the matcher is Unicode-aware, and `\d` would
/// accept digits `%H:%M:%S` cannot parse.
pub const TIME_OF_DAY_PATTERN: &str = r"([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])";

/// chrono layout matching [`TIME_OF_DAY_PATTERN`].
pub const TIME_OF_DAY_LAYOUT: &str = "%H:%M:%S";

/// Lines longer than this are skipped, not parsed.
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
