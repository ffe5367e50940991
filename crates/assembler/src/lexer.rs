//! Tokenizer for UVM assembly text.

/// Comments start with `#` and extend to end of line.
const COMMENT: char = '#';

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
pub(crate) fn tokenize_line(line: &str) -> Vec<&str> {
    strip_comment(line).split_whitespace().collect()
}

/// Drop everything from the first `#` onward and trim what is left.
pub(crate) fn strip_comment(line: &str) -> &str {
    let code = match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.trim()
}
