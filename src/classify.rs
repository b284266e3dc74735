//! Rewrites raw parser messages into short, localized explanations.
//!
//! Matching is done against the raw message, never against a previously
//! cleaned one, and is case-sensitive.

use regex::Regex;
use std::sync::LazyLock;

use crate::locale::{Explanation, Locale};

/// Text identifying the parsing facility
/// ("SyntaxError: JSON.parse: ..."), stacked any number of times
static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:Uncaught\s+)?SyntaxError:\s*|JSON\.parse:\s*|JSON Parse error:\s*)*",
    )
    .expect("prefix pattern is valid")
});

/// Location fragments parsers embed in their messages
static LOCATION_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\s*(?:in JSON\s+)?at ",
        r"(?:position \d+(?:\s*\(line \d+ column \d+\))?",
        r"|line \d+ column \d+(?: of the JSON data)?)",
    ))
    .expect("location pattern is valid")
});

/// The offending token after "Unexpected token", bare or single-quoted
static UNEXPECTED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Unexpected token\s+(?:'([^']+)'|'(')'|([^\s,]+))")
        .expect("token pattern is valid")
});

/// Strip only the parser-facility prefix, keeping any location text
pub fn strip_prefix(raw: &str) -> String {
    PREFIX.replace(raw, "").trim().to_string()
}

/// Strip the prefix and every embedded location fragment
fn clean(raw: &str) -> String {
    let without_prefix = PREFIX.replace(raw, "");
    LOCATION_FRAGMENT
        .replace_all(&without_prefix, "")
        .trim()
        .to_string()
}

/// Pick the explanation for a raw message, or `None` to keep the cleaned text
fn explanation_for(raw: &str, error_char: Option<char>) -> Option<Explanation> {
    let at_char = || Explanation::UnexpectedCharacter(error_char.map(String::from));

    if raw.contains("Unexpected end") {
        return Some(Explanation::UnexpectedEnd);
    }
    if raw.contains("Unexpected token") {
        let token = UNEXPECTED_TOKEN
            .captures(raw)
            .and_then(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
            .map(|m| m.as_str().to_string());
        return Some(match token {
            Some(token) => Explanation::UnexpectedCharacter(Some(token)),
            None => at_char(),
        });
    }
    if raw.contains("Expected") {
        return Some(Explanation::MissingCharacter);
    }
    if raw.contains("Unterminated string") {
        return Some(Explanation::UnterminatedString);
    }

    // serde_json phrasings
    if raw.contains("EOF while parsing a string") {
        return Some(Explanation::UnterminatedString);
    }
    if raw.contains("EOF while parsing") {
        return Some(Explanation::UnexpectedEnd);
    }
    if raw.contains("expected value") {
        return Some(at_char());
    }
    if raw.contains("expected `") {
        return Some(Explanation::MissingCharacter);
    }
    if raw.contains("trailing comma") {
        return Some(Explanation::TrailingComma);
    }
    if raw.contains("key must be a string") {
        return Some(Explanation::KeyNotString);
    }
    if raw.contains("control character") {
        return Some(Explanation::ControlCharacter);
    }
    if raw.contains("invalid escape") || raw.contains("invalid unicode code point") {
        return Some(Explanation::InvalidEscape);
    }
    if raw.contains("trailing characters") {
        return Some(Explanation::TrailingCharacters);
    }

    None
}

/// Turn a raw parser message into a user-facing explanation.
///
/// `error_char` is the character at the failure offset, if known; it is only
/// used when the message names an unexpected token without quoting it.
pub fn classify(raw: &str, error_char: Option<char>, locale: Locale) -> String {
    if let Some(explanation) = explanation_for(raw, error_char) {
        return locale.explain(&explanation);
    }

    let cleaned = clean(raw);
    if !cleaned.is_empty() {
        return cleaned;
    }
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    locale.explain(&Explanation::Invalid)
}
