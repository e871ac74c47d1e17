//! vCard text escaping.

/// Escapes a field or parameter value for serialization.
///
/// Escapes backslash, newline and comma. Semicolons are left alone so
/// structured values keep their component separators.
#[must_use]
pub fn escape_value(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            _ => result.push(c),
        }
    }

    result
}
