//! Visitor language preference, remembered across visits with a cookie.

use axum::http::{HeaderMap, HeaderValue};
use axum::http::header::COOKIE;

/// Cookie that carries the preferred language code.
pub const LANG_COOKIE: &str = "lang";

/// One year, in seconds.
const MAX_AGE_SECS: u32 = 31_536_000;

/// Read the stored language preference from the request headers.
///
/// Returns whatever code the visitor last picked, verbatim. Callers decide
/// what to do with codes they do not recognize.
pub fn stored_language(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let raw = match header.to_str() {
            Ok(raw) => raw,
            Err(_) => continue,
        };

        for pair in raw.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == LANG_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Build the `Set-Cookie` value that remembers a language choice.
///
/// Returns `None` when the code cannot be carried in a cookie value; the
/// caller skips persistence in that case and the page still renders.
pub fn remember_language(code: &str) -> Option<HeaderValue> {
    if code.is_empty() || !code.bytes().all(is_cookie_octet) {
        return None;
    }

    let cookie = format!("{LANG_COOKIE}={code}; Path=/; Max-Age={MAX_AGE_SECS}; SameSite=Lax");

    HeaderValue::from_str(&cookie).ok()
}

// RFC 6265 cookie-octet: printable US-ASCII minus whitespace, double quote,
// comma, semicolon and backslash.
fn is_cookie_octet(byte: u8) -> bool {
    matches!(byte,
        0x21 | 0x23..=0x2b | 0x2d..=0x3a | 0x3c..=0x5b | 0x5d..=0x7e)
}
