//! Leading level word detection (`INFO message`, `[WARN] message`, `ERROR: message`).

use crate::logs::Severity;

/// Split a leading level word off `segment`.
///
/// Returns the severity, the word as written, and the remaining text.
pub(crate) fn split_level(segment: &str) -> Option<(Severity, &str, &str)> {
    let segment = segment.trim_start();
    let word_end = segment
        .find(char::is_whitespace)
        .unwrap_or(segment.len());
    let word = &segment[..word_end];

    let level = word
        .trim_start_matches('[')
        .trim_end_matches(':')
        .trim_end_matches(']');

    if level.is_empty() {
        return None;
    }

    let severity = Severity::from_level_text(level)?;
    Some((severity, level, segment[word_end..].trim()))
}
