//! Locating parse failures in the source text.
//!
//! A failure message is mined for location hints in a fixed order: a char
//! offset, then (for serde_json only) a line/column pair, then a bare line
//! number. The first hint found produces the diagnostic; with no hint at all
//! the failure is pinned to the start of the document.

use regex::Regex;
use std::error::Error as StdError;
use std::fmt;
use std::sync::LazyLock;

use crate::classify::{classify, strip_prefix};
use crate::diagnostic::Diagnostic;
use crate::locale::Locale;
use crate::position::{ColumnUnit, offset_of, resolve};

static OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"position\s+(\d+)").expect("offset pattern is valid"));

static LINE_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"line\s+(\d+)\s+column\s+(\d+)").expect("line/column pattern is valid")
});

static LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line\s+(\d+)").expect("line pattern is valid"));

/// A message-only failure from a generic JSON parser,
/// e.g. `Unexpected token } in JSON at position 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        SyntaxError {
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for SyntaxError {}

/// A failure we know how to read
struct Failure {
    message: String,
    /// Set when the parser's "line L column C" text is trusted, and how it
    /// counts columns
    line_columns: Option<ColumnUnit>,
}

impl Failure {
    fn recognize(failure: &(dyn StdError + 'static)) -> Option<Self> {
        if let Some(e) = failure.downcast_ref::<SyntaxError>() {
            return Some(Failure {
                message: e.message.clone(),
                line_columns: None,
            });
        }
        if let Some(e) = failure.downcast_ref::<serde_json::Error>() {
            return Some(Failure {
                message: e.to_string(),
                line_columns: Some(ColumnUnit::Byte),
            });
        }
        None
    }
}

/// Build a diagnostic for a parse failure over `source`, in English.
///
/// Returns `None` when `failure` is not a parser failure we recognize.
pub fn locate(failure: &(dyn StdError + 'static), source: &str) -> Option<Diagnostic> {
    locate_with(failure, source, Locale::default())
}

/// Like [`locate`], with messages in the given language
pub fn locate_with(
    failure: &(dyn StdError + 'static),
    source: &str,
    locale: Locale,
) -> Option<Diagnostic> {
    let failure = Failure::recognize(failure)?;

    let diagnostic = by_offset(&failure, source, locale)
        .or_else(|| by_line_column(&failure, source, locale))
        .or_else(|| by_line(&failure, locale))
        .unwrap_or_else(|| Diagnostic {
            line: 1,
            column: 1,
            message: prefix_stripped(&failure.message, locale),
            position: 0,
            error_char: None,
        });

    Some(diagnostic)
}

/// First capture of `pattern` in `message` as a number, if it fits
fn capture_number(pattern: &Regex, message: &str) -> Option<usize> {
    pattern
        .captures(message)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

fn at_position(failure: &Failure, source: &str, position: usize, locale: Locale) -> Diagnostic {
    let resolved = resolve(source, position);
    Diagnostic {
        line: resolved.line,
        column: resolved.column,
        message: classify(&failure.message, resolved.error_char, locale),
        position,
        error_char: resolved.error_char,
    }
}

fn by_offset(failure: &Failure, source: &str, locale: Locale) -> Option<Diagnostic> {
    let position = capture_number(&OFFSET, &failure.message)?;
    Some(at_position(failure, source, position, locale))
}

fn by_line_column(failure: &Failure, source: &str, locale: Locale) -> Option<Diagnostic> {
    let unit = failure.line_columns?;
    let caps = LINE_COLUMN.captures(&failure.message)?;
    let line: usize = caps.get(1)?.as_str().parse().ok()?;
    let column: usize = caps.get(2)?.as_str().parse().ok()?;

    let position = offset_of(source, line, column, unit);
    Some(at_position(failure, source, position, locale))
}

fn by_line(failure: &Failure, locale: Locale) -> Option<Diagnostic> {
    let line = capture_number(&LINE, &failure.message)?;
    Some(Diagnostic {
        line: line.max(1),
        column: 1,
        message: prefix_stripped(&failure.message, locale),
        position: 0,
        error_char: None,
    })
}

fn prefix_stripped(message: &str, locale: Locale) -> String {
    let stripped = strip_prefix(message);
    if stripped.is_empty() {
        classify("", None, locale)
    } else {
        stripped
    }
}
