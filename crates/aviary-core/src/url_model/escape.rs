//! Percent-escaping that preserves already-encoded components.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in candidate URLs: everything outside alphanumerics, the
/// unreserved marks `_ . - ~`, and the delimiter set `/ : % ? = &`.
/// Keeping `%` unescaped means an already percent-encoded URL passes
/// through unchanged instead of being double-escaped.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b':')
    .remove(b'%')
    .remove(b'?')
    .remove(b'=')
    .remove(b'&')
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Escapes spaces, unicode, and other unsafe bytes; leaves `/:%?=&` and
/// unreserved characters intact.
pub fn escape_url(url: &str) -> String {
    utf8_percent_encode(url, URL_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_encoded() {
        assert_eq!(
            escape_url("https://example.com/Turdus merula.jpg"),
            "https://example.com/Turdus%20merula.jpg"
        );
    }

    #[test]
    fn unicode_encoded() {
        assert_eq!(
            escape_url("https://example.com/mésange.png"),
            "https://example.com/m%C3%A9sange.png"
        );
    }

    #[test]
    fn already_escaped_not_double_escaped() {
        let url = "https://example.com/a%20bird.png";
        assert_eq!(escape_url(url), url);
    }

    #[test]
    fn query_delimiters_preserved() {
        let url = "https://example.com/img?width=256&fmt=png";
        assert_eq!(escape_url(url), url);
    }
}
