//! Character encoding detection and transcoding for the bytes entry point.
//!
//! The tokenizer consumes UTF-8. Documents arriving as raw bytes are sniffed
//! for a charset declaration in their first kilobyte and transcoded before
//! parsing; undeclared documents are assumed UTF-8 with lossy replacement.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches `<meta charset="...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Sniffs the declared character encoding of an HTML document.
///
/// Only the first 1024 bytes are examined. Falls back to UTF-8 when no
/// usable declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head = String::from_utf8_lossy(head);

    for pattern in [&*META_CHARSET, &*META_CONTENT_TYPE] {
        if let Some(captures) = pattern.captures(&head) {
            if let Some(encoding) = Encoding::for_label(captures[1].as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcodes raw HTML bytes to UTF-8 using the sniffed encoding. Bytes that
/// cannot be decoded become U+FFFD replacement characters.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body></body></html>").name(), "UTF-8");
    }

    #[test]
    fn transcodes_latin1_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xe9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }
}
