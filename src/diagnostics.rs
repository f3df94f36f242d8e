//! Caret diagnostics for parse failures
//!
//! Renders a [`ParseError`] against the line it came from, with a caret
//! pointing at the offending column:
//!
//! ```text
//! error: foo is undefined
//!   | program foo end
//!   |         ^
//! ```

use crate::parser::parser::ParseError;

/// Render a parse failure as a three-line diagnostic.
///
/// The caret lands on the error's column; for errors raised at the end of
/// the input it points one past the last character of the line.
pub fn render(line: &str, error: &ParseError) -> String {
    let mut out = String::new();

    out.push_str("error: ");
    out.push_str(&error.message);
    out.push('\n');

    out.push_str("  | ");
    out.push_str(line);
    out.push('\n');

    out.push_str("  | ");
    for _ in 0..error.column {
        out.push(' ');
    }
    out.push('^');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser::parse;

    #[test]
    fn test_caret_under_offending_token() {
        let line = "program foo end";
        let err = parse(line).unwrap_err();

        assert_eq!(
            render(line, &err),
            "error: foo is undefined\n\
             \x20 | program foo end\n\
             \x20 |         ^"
        );
    }

    #[test]
    fn test_caret_past_line_end_for_missing_end() {
        let line = "program go";
        let err = parse(line).unwrap_err();

        assert_eq!(
            render(line, &err),
            "error: Missing 'end'\n\
             \x20 | program go\n\
             \x20 |           ^"
        );
    }
}
