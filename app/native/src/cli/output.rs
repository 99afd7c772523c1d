//! CLI output formatting utilities.
//!
//! Tables are built with `tabled` by the individual commands; this module
//! holds the shared cell formatters and the highlighted JSON printer.

use std::fmt::Write as _;

use colored::Colorize;
use uuid::Uuid;

/// Indentation unit for pretty-printed JSON.
const INDENT: &str = "  ";

/// Prints a JSON value with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: bold
pub fn print_highlighted_json(value: &serde_json::Value) {
    println!("{}", render_highlighted_json(value));
}

/// Renders a JSON value with the same layout as `serde_json::to_string_pretty`,
/// colorizing each token.
#[must_use]
pub fn render_highlighted_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    render_value(&mut out, value, 0);
    out
}

fn render_value(out: &mut String, value: &serde_json::Value, depth: usize) {
    use serde_json::Value;

    match value {
        Value::Null => push_colored(out, "null".magenta()),
        Value::Bool(flag) => push_colored(out, flag.to_string().magenta()),
        Value::Number(number) => push_colored(out, number.to_string().yellow()),
        Value::String(text) => push_colored(out, quote(text).green()),
        Value::Array(items) if items.is_empty() => push_colored(out, "[]".bold()),
        Value::Object(map) if map.is_empty() => push_colored(out, "{}".bold()),
        Value::Array(items) => {
            push_colored(out, "[".bold());
            for (index, item) in items.iter().enumerate() {
                open_entry(out, index, depth + 1);
                render_value(out, item, depth + 1);
            }
            close_block(out, depth, "]");
        }
        Value::Object(map) => {
            push_colored(out, "{".bold());
            for (index, (key, item)) in map.iter().enumerate() {
                open_entry(out, index, depth + 1);
                push_colored(out, quote(key).cyan());
                out.push_str(": ");
                render_value(out, item, depth + 1);
            }
            close_block(out, depth, "}");
        }
    }
}

fn open_entry(out: &mut String, index: usize, depth: usize) {
    if index > 0 {
        out.push(',');
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn close_block(out: &mut String, depth: usize, bracket: &str) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    push_colored(out, bracket.bold());
}

fn push_colored(out: &mut String, token: colored::ColoredString) {
    let _ = write!(out, "{token}");
}

/// JSON-escapes and quotes a string.
fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return "…".to_string();
    }

    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{kept}…")
}

/// Formats a boolean as a colored check or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// First eight hex digits of an ID, enough to tell cards apart in a table.
#[must_use]
pub fn short_id(id: &Uuid) -> String { id.simple().to_string().chars().take(8).collect() }

/// Formats a pixel value with one decimal.
#[must_use]
pub fn format_px(value: f64) -> String { format!("{value:.1}") }

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(value: &serde_json::Value) -> String {
        colored::control::set_override(false);
        render_highlighted_json(value)
    }

    #[test]
    fn test_render_matches_pretty_layout() {
        let value = serde_json::json!({
            "columns": 6,
            "title": "Quizzes \"A\"",
            "showHeader": true,
            "rows": [[], {}, [1.5, null]],
        });
        assert_eq!(plain(&value), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(plain(&serde_json::json!(null)), "null");
        assert_eq!(plain(&serde_json::json!("x")), "\"x\"");
        assert_eq!(plain(&serde_json::json!([])), "[]");
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_min_length() {
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Größenklasse", 6), "Größe…");
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);
        assert_eq!(short_id(&id), "12345678");
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(163.5), "163.5");
        assert_eq!(format_px(120.0), "120.0");
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }
}
