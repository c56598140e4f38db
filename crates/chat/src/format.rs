//! Answer payload formatting.
//!
//! The service returns one combined text blob: the answer, then the literal
//! `SOURCES:` marker, then a `- `-delimited list of raw source identifiers
//! (path separators encoded as `__`, extension `.txt`). This module splits
//! that blob into a clean answer and clickable URLs.

use lugpt_core::{AppError, AppResult};

/// Marker separating the answer text from the cited sources.
const SOURCES_MARKER: &str = "SOURCES:\n";

/// Delimiter in front of each raw source identifier.
const SOURCE_DELIMITER: &str = "- ";

/// Characters stripped from the right end of every raw source token.
///
/// This reproduces the service contract's character-class strip: it removes
/// the `.txt` extension and trailing newline, but it equally eats any other
/// trailing run of `.`, `t`, `x`, or newline characters, so a name ending
/// in "...text" loses letters too. Consumers depend on the current output,
/// so the class semantics must not be narrowed to a literal suffix match.
const SOURCE_TRAILER_CHARS: [char; 4] = ['.', 't', 'x', '\n'];

/// A parsed service payload: clean answer plus normalized source URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAnswer {
    /// Answer text, everything before the marker
    pub answer: String,

    /// Source URLs in payload order, duplicates preserved
    pub sources: Vec<String>,
}

impl FormattedAnswer {
    /// Presentation-layer line: answer and sources joined by single spaces.
    pub fn display_line(&self) -> String {
        if self.sources.is_empty() {
            return self.answer.clone();
        }
        format!("{} {}", self.answer, self.sources.join(" "))
    }
}

/// Split a combined answer-plus-sources payload.
///
/// Splits on the FIRST occurrence of the marker only; any later occurrence
/// stays inside the raw-sources portion and flows through token cleaning
/// like ordinary text. Each non-empty `- ` token becomes a URL: `__` turns
/// back into `/`, the trailing character class is stripped, and `https://`
/// is prepended. Empty tokens (e.g. before the first delimiter) are
/// discarded.
///
/// # Errors
/// `AppError::MalformedResponse` when the marker is absent. The turn is
/// fatal at that point: nothing should be recorded in the history.
pub fn split_answer(raw: &str) -> AppResult<FormattedAnswer> {
    let (answer, raw_sources) = raw.split_once(SOURCES_MARKER).ok_or_else(|| {
        AppError::MalformedResponse(format!(
            "payload does not contain the '{}' marker",
            SOURCES_MARKER.trim_end()
        ))
    })?;

    let sources = raw_sources
        .split(SOURCE_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(rebuild_url)
        .collect();

    Ok(FormattedAnswer {
        answer: answer.to_string(),
        sources,
    })
}

/// Turn one raw source identifier back into an absolute URL.
fn rebuild_url(token: &str) -> String {
    let path = token.replace("__", "/");
    let cleaned = path.trim_end_matches(SOURCE_TRAILER_CHARS);
    format!("https://{}", cleaned)
}
