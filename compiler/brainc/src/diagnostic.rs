//! Rendering of front-end errors against their source text.

use std::fmt::Write;

use brain_parse::ParseError;

/// Render a parse error with its location and a caret under the offending
/// token.
///
/// ```text
/// error: expected `:=`, found integer `1`
///  --> 1:7
///   |
/// 1 | new x 1
///   |       ^
/// ```
pub fn render_parse_error(source: &str, origin: Option<&str>, err: &ParseError) -> String {
    let (line, col) = err.span.line_col(source);
    let text = source.lines().nth(line - 1).unwrap_or("");
    let gutter = " ".repeat(line.to_string().len());

    // Carets cover the token, clipped to the end of its line.
    let remaining = text.chars().count().saturating_sub(col - 1);
    let width = (err.span.len() as usize).clamp(1, remaining.max(1));

    let mut out = String::new();
    let _ = writeln!(out, "error: {err}");
    match origin {
        Some(path) => {
            let _ = writeln!(out, "{gutter}--> {path}:{line}:{col}");
        }
        None => {
            let _ = writeln!(out, "{gutter}--> {line}:{col}");
        }
    }
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line} | {text}");
    let _ = write!(out, "{gutter} | {}{}", " ".repeat(col - 1), "^".repeat(width));
    out
}
