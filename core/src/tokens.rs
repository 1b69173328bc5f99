//! Stateless helpers for normalizing and coercing raw argument tokens.

use std::path::PathBuf;

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
///
/// # Examples
///
/// ```
/// use argspec_core::tokens::trim_to_none;
///
/// assert_eq!(trim_to_none("  file.txt "), Some("file.txt"));
/// assert_eq!(trim_to_none(" \t"), None);
/// ```
pub fn trim_to_none(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Returns `true` if the value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Strips one enclosing pair of `quote` characters.
///
/// The value is returned unchanged unless it both starts and ends with
/// `quote` and is at least two characters long.
///
/// # Examples
///
/// ```
/// use argspec_core::tokens::unwrap_quote;
///
/// assert_eq!(unwrap_quote("\"a b\"", '"'), "a b");
/// assert_eq!(unwrap_quote("\"\"x\"\"", '"'), "\"x\"");
/// assert_eq!(unwrap_quote("\"a b'", '"'), "\"a b'");
/// assert_eq!(unwrap_quote("\"", '"'), "\"");
/// ```
pub fn unwrap_quote(value: &str, quote: char) -> &str {
    if value.chars().count() < 2 {
        return value;
    }
    value
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(value)
}

/// Strips one layer of double quotes, or single quotes if the token was not
/// double-quoted.
///
/// # Examples
///
/// ```
/// use argspec_core::tokens::unwrap_token;
///
/// assert_eq!(unwrap_token("\"value\""), "value");
/// assert_eq!(unwrap_token("'value'"), "value");
/// assert_eq!(unwrap_token("\"'value'\""), "'value'");
/// assert_eq!(unwrap_token("'value\""), "'value\"");
/// ```
pub fn unwrap_token(value: &str) -> &str {
    let unwrapped = unwrap_quote(value, '"');
    if unwrapped.len() != value.len() {
        unwrapped
    } else {
        unwrap_quote(value, '\'')
    }
}

/// Removes a leading `--` or `-` from an option name.
pub fn strip_hyphens(name: &str) -> &str {
    name.strip_prefix("--")
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name)
}

/// Parses a decimal integer, falling back to `default` when the value is
/// absent or unparseable. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use argspec_core::tokens::parse_integer;
///
/// assert_eq!(parse_integer(Some(" 42 "), 0), 42);
/// assert_eq!(parse_integer(Some("-7"), 0), -7);
/// assert_eq!(parse_integer(Some("4x"), 9), 9);
/// assert_eq!(parse_integer(None, 9), 9);
/// ```
pub fn parse_integer(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Builds a path from a non-blank value.
///
/// Existence and file type are not checked here; that is left to the
/// caller.
pub fn to_path(value: Option<&str>) -> Option<PathBuf> {
    value.and_then(trim_to_none).map(PathBuf::from)
}

/// Returns the element at `index`, or `None` when the index is negative or
/// past the end.
pub fn value_at<T>(items: &[T], index: isize) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}
