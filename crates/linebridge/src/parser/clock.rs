use chrono::NaiveTime;
use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};

use super::anchor::DateAnchor;
use super::level::split_level;
use super::traits::*;
use super::{MAX_LINE_SIZE, TIME_OF_DAY_LAYOUT, TIME_OF_DAY_PATTERN};

/// Parser keyed on time-of-day stamps.
///
/// Every non-overlapping stamp starts a record. The record body is the text
/// after the stamp, up to the next stamp or the end of the line. A leading
/// level word in that text becomes the severity, and anything on the line
/// before the first stamp becomes the prefix.
///
/// ```rust,ignore
/// let parser = TimeOfDayParser::new();
/// let records = parser.parse_fields("logger: 15:04:05 INFO started\n")?;
/// assert_eq!(records[0].body.as_deref(), Some("started"));
/// ```
pub struct TimeOfDayParser {
    matcher: RegexMatcher,
    anchor: DateAnchor,
    extract_severity: bool,
}

impl TimeOfDayParser {
    pub fn new() -> Self {
        Self::with_pattern(TIME_OF_DAY_PATTERN)
            .expect("built-in time-of-day pattern must compile")
    }

    /// Use a custom stamp pattern. Matches are still parsed with
    /// [`TIME_OF_DAY_LAYOUT`], so a looser pattern can produce parse errors.
    pub fn with_pattern(pattern: &str) -> Result<Self, ParseError> {
        let matcher = RegexMatcherBuilder::new()
            .multi_line(false)
            .build(pattern)
            .map_err(|e| ParseError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            matcher,
            anchor: DateAnchor::default(),
            extract_severity: true,
        })
    }

    pub fn with_anchor(mut self, anchor: DateAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_severity_extraction(mut self, enabled: bool) -> Self {
        self.extract_severity = enabled;
        self
    }

    /// Byte ranges of every stamp in `line`.
    fn find_stamps(&self, line: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        // RegexMatcher reports `NoError`, which is never constructed.
        let _ = self.matcher.find_iter(line.as_bytes(), |m| {
            spans.push((m.start(), m.end()));
            true
        });
        spans
    }

    fn parse_line(&self, line: &str, out: &mut Vec<PartialRecord>) -> Result<(), ParseError> {
        let spans = self.find_stamps(line);

        for (i, &(start, end)) in spans.iter().enumerate() {
            let time_text = &line[start..end];
            let time = NaiveTime::parse_from_str(time_text, TIME_OF_DAY_LAYOUT)
                .map_err(|source| ParseError::Timestamp {
                    text: time_text.to_string(),
                    source,
                })?;

            let segment_end = spans.get(i + 1).map(|&(next, _)| next).unwrap_or(line.len());
            let segment = line[end..segment_end].trim();

            let mut partial = PartialRecord::new(time_text);
            partial.timestamp = Some(self.anchor.resolve(time));

            if i == 0 {
                partial.prefix = non_empty(line[..start].trim());
            }

            let body = match split_level(segment).filter(|_| self.extract_severity) {
                Some((severity, level, rest)) => {
                    partial.severity = Some(severity);
                    partial.level = Some(level.to_string());
                    rest
                }
                None => segment,
            };
            partial.body = non_empty(body);

            out.push(partial);
        }

        Ok(())
    }
}

impl Default for TimeOfDayParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldParser for TimeOfDayParser {
    fn parse_fields(&self, text: &str) -> Result<Vec<PartialRecord>, ParseError> {
        let mut records = Vec::new();
        for line in text.lines() {
            if line.len() > MAX_LINE_SIZE {
                tracing::warn!(
                    "Skipping oversized log line: {} bytes (max: {} bytes)",
                    line.len(),
                    MAX_LINE_SIZE
                );
                continue;
            }
            self.parse_line(line, &mut records)?;
        }
        Ok(records)
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
