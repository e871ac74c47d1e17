//! Escaping is lossless over backslash, newline and comma.

use proptest::prelude::*;

use crate::rfc::vcard::build::escape_value;

/// Inverse of `escape_value`.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}

proptest! {
    #[test]
    fn special_characters_round_trip(s in "[\\\\\n,a-z;]{0,32}") {
        prop_assert_eq!(unescape(&escape_value(&s)), s);
    }

    #[test]
    fn any_text_round_trips(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape_value(&s)), s);
    }

    #[test]
    fn escaped_text_has_no_raw_newline(s in any::<String>()) {
        prop_assert!(!escape_value(&s).contains('\n'));
    }
}

#[test]
fn unescape_inverts_known_sequences() {
    assert_eq!(unescape("a\\\\b\\nc\\,d"), "a\\b\nc,d");
}
