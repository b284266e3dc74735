//! The diagnostic record handed to whatever displays a parse failure.

use serde::Serialize;
use std::fmt;

use crate::locale::Locale;

/// Context lines longer than this are cut when rendered
const MAX_CONTEXT_CHARS: usize = 80;

/// Where and why parsing failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// 1-indexed line
    pub line: usize,
    /// 1-indexed column, relative to the line start
    pub column: usize,
    /// Localized explanation, parser jargon stripped
    pub message: String,
    /// 0-indexed char offset into the source; 0 when unknown
    pub position: usize,
    /// The character at `position`, when it indexes a real character
    pub error_char: Option<char>,
}

impl Diagnostic {
    /// The source line this diagnostic points at
    pub fn context_line<'a>(&self, source: &'a str) -> Option<&'a str> {
        source
            .split('\n')
            .nth(self.line.saturating_sub(1))
            .map(|line| line.trim_end_matches('\r'))
    }

    /// Render a plain-text report: heading, message, location, and the
    /// offending line with a caret under the column.
    pub fn render(
        &self,
        source: &str,
        filename: &str,
        locale: Locale,
        with_context: bool,
    ) -> String {
        let mut out = String::new();
        out.push_str(&locale.failed_to_parse(filename));
        out.push('\n');
        out.push_str(&self.message);
        out.push('\n');
        out.push_str(&locale.location(self.line, self.column));
        out.push('\n');

        if !with_context {
            return out;
        }

        if let Some(context) = self.context_line(source) {
            let truncated = if context.chars().count() > MAX_CONTEXT_CHARS {
                let head: String = context.chars().take(MAX_CONTEXT_CHARS).collect();
                format!("{}...", head)
            } else {
                context.to_string()
            };

            // Tabs keep their width so the caret lines up
            let spaces: String = context
                .chars()
                .chain(std::iter::repeat(' '))
                .take(self.column.saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();

            out.push('\n');
            out.push_str(&truncated);
            out.push('\n');
            out.push_str(&spaces);
            out.push_str("^\n");
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Diagnostic {
        Diagnostic {
            line: 2,
            column: 8,
            message: "Unexpected character: `}`".to_string(),
            position: 9,
            error_char: Some('}'),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "2:8: Unexpected character: `}`");
    }

    #[test]
    fn test_context_line() {
        let source = "{\r\n  \"a\": }\r\n";
        assert_eq!(sample().context_line(source), Some("  \"a\": }"));
        assert_eq!(sample().context_line("{}"), None);
    }

    #[test]
    fn test_render_with_caret() {
        let source = "{\n  \"a\": }";
        let rendered = sample().render(source, "data.json", Locale::English, true);
        let expected = "Failed to parse data.json\n\
                        Unexpected character: `}`\n\
                        Line 2, Column 8\n\
                        \n  \"a\": }\n       ^\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_without_context() {
        let rendered = sample().render("{\n  \"a\": }", "data.json", Locale::Chinese, false);
        assert_eq!(
            rendered,
            "解析 data.json 失败\nUnexpected character: `}`\n第 2 行，第 8 列\n"
        );
    }

    #[test]
    fn test_render_truncates_long_lines_on_char_boundaries() {
        let source = "é".repeat(100);
        let diagnostic = Diagnostic {
            line: 1,
            column: 3,
            message: "x".to_string(),
            position: 2,
            error_char: Some('é'),
        };
        let rendered = diagnostic.render(&source, "f", Locale::English, true);
        assert!(rendered.contains(&format!("{}...", "é".repeat(80))));
        assert!(rendered.ends_with("\n  ^\n"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "line": 2,
                "column": 8,
                "message": "Unexpected character: `}`",
                "position": 9,
                "errorChar": "}"
            })
        );
    }
}
