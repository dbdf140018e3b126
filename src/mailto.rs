//! Fallback delivery: when no form endpoint is configured, submissions turn
//! into a pre-filled `mailto:` compose link the browser is redirected to.

use crate::contact::Inquiry;

/// Fixed subject line for fallback inquiries.
pub const SUBJECT: &str = "Project inquiry — Trochlear";

/// Build the `mailto:` target for an inquiry.
///
/// The body is a fixed template over the four submitted fields; subject and
/// body are percent-encoded, the address is used verbatim.
pub fn compose_url(address: &str, inquiry: &Inquiry) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\nCompany: {}\n\n{}",
        inquiry.name, inquiry.email, inquiry.company, inquiry.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        address,
        encode_component(SUBJECT),
        encode_component(&body)
    )
}

/// Percent-encode a string for use in a `mailto:` query value.
///
/// Keeps ASCII alphanumerics and `- _ . ! ~ * ' ( )`; every other byte of
/// the UTF-8 encoding becomes `%XX`. This is the character set JavaScript's
/// `encodeURIComponent` leaves alone, which is what mail clients expect.
pub fn encode_component(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut result = String::with_capacity(text.len() * 3);

    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => result.push(byte as char),
            _ => {
                result.push('%');
                result.push(HEX[(byte >> 4) as usize] as char);
                result.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }

    result
}
