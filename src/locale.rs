//! Display languages and the diagnostic message catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Language used for diagnostic messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-CN")]
    Chinese,
}

/// The explanations the classifier can substitute for a raw parser message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    UnexpectedEnd,
    UnexpectedCharacter(Option<String>),
    MissingCharacter,
    UnterminatedString,
    TrailingComma,
    KeyNotString,
    ControlCharacter,
    InvalidEscape,
    TrailingCharacters,
    /// Used when the parser gave us nothing to work with
    Invalid,
}

impl Locale {
    /// Render an explanation in this language
    pub fn explain(self, explanation: &Explanation) -> String {
        use Explanation::*;

        match (self, explanation) {
            (Locale::English, UnexpectedEnd) => {
                "Unexpected end of input: a closing bracket or quote is probably missing".to_string()
            }
            (Locale::English, UnexpectedCharacter(token)) => {
                format!("Unexpected character: `{}`", token.as_deref().unwrap_or("unknown"))
            }
            (Locale::English, MissingCharacter) => "A required character is missing".to_string(),
            (Locale::English, UnterminatedString) => {
                "A string value was not properly closed; check the quotes".to_string()
            }
            (Locale::English, TrailingComma) => {
                "Trailing comma before a closing bracket".to_string()
            }
            (Locale::English, KeyNotString) => {
                "Object keys must be double-quoted strings".to_string()
            }
            (Locale::English, ControlCharacter) => {
                "Raw control character inside a string; escape it".to_string()
            }
            (Locale::English, InvalidEscape) => {
                "Invalid escape sequence inside a string".to_string()
            }
            (Locale::English, TrailingCharacters) => {
                "Unexpected content after the end of the JSON value".to_string()
            }
            (Locale::English, Invalid) => "Invalid JSON".to_string(),

            (Locale::Chinese, UnexpectedEnd) => {
                "JSON 意外结束，可能缺少闭合的括号或引号".to_string()
            }
            (Locale::Chinese, UnexpectedCharacter(token)) => {
                format!("意外的字符：`{}`", token.as_deref().unwrap_or("未知"))
            }
            (Locale::Chinese, MissingCharacter) => "缺少必需的字符".to_string(),
            (Locale::Chinese, UnterminatedString) => "字符串未正确闭合，请检查引号".to_string(),
            (Locale::Chinese, TrailingComma) => "右括号前存在多余的逗号".to_string(),
            (Locale::Chinese, KeyNotString) => "对象的键必须是双引号字符串".to_string(),
            (Locale::Chinese, ControlCharacter) => "字符串中包含未转义的控制字符".to_string(),
            (Locale::Chinese, InvalidEscape) => "字符串中的转义序列无效".to_string(),
            (Locale::Chinese, TrailingCharacters) => "JSON 值结束后存在多余内容".to_string(),
            (Locale::Chinese, Invalid) => "无效的 JSON".to_string(),
        }
    }

    /// Heading used when rendering a failure for a file
    pub fn failed_to_parse(self, filename: &str) -> String {
        match self {
            Locale::English => format!("Failed to parse {}", filename),
            Locale::Chinese => format!("解析 {} 失败", filename),
        }
    }

    /// "Line L, Column C" label
    pub fn location(self, line: usize, column: usize) -> String {
        match self {
            Locale::English => format!("Line {}, Column {}", line, column),
            Locale::Chinese => format!("第 {} 行，第 {} 列", line, column),
        }
    }

    pub fn valid(self, filename: &str) -> String {
        match self {
            Locale::English => format!("✓ {} is valid JSON", filename),
            Locale::Chinese => format!("✓ {} 是有效的 JSON", filename),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::Chinese => write!(f, "zh-CN"),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::English),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Chinese),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Chinese);
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Chinese);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_round_trips() {
        for locale in [Locale::English, Locale::Chinese] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_unknown_character_placeholder() {
        let explanation = Explanation::UnexpectedCharacter(None);
        assert_eq!(Locale::English.explain(&explanation), "Unexpected character: `unknown`");
        assert_eq!(Locale::Chinese.explain(&explanation), "意外的字符：`未知`");
    }

    #[test]
    fn test_locale_serialization() {
        let json = serde_json::to_string(&Locale::Chinese).unwrap();
        assert_eq!(json, "\"zh-CN\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::English);
    }
}
