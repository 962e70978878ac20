//! Helpers for the client's tag markup (`<gold>text</gold>`).

use std::sync::LazyLock;

use regex::Regex;

/// Escape text so it renders literally inside markup.
///
/// A backslash escapes the next character; `<` is the only character that
/// opens a tag.
pub fn escape_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '<' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Substitute `{{name}}` placeholders. Unknown placeholders are left as is.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// ASCII whitespace plus the no-break space the server pads ranks with.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\t\n\x0B\x0C\r \x{A0}]+").expect("whitespace pattern is valid")
});

/// Collapse every whitespace run (NBSP included) to one space, then trim
/// control characters and spaces from both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, " ")
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}
