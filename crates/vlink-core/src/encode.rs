//! Percent-encoding for URI components.
//!
//! Only the RFC 3986 unreserved characters pass through untouched; every
//! other byte of the UTF-8 input is written as `%XX`. This is stricter than
//! most query encoders: `/`, `+` and `=` (common in base64 keys) are escaped.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ~`.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `input` with no extra safe characters.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}
