//! Fixed-pattern field extraction: caller identity from the bearer credential,
//! resource id from the `user_id=` query assignment.
//!
//! Both lookups are deliberately narrow. Other credential schemes, other key
//! names, different casing or percent-encoded digits are not recognised.

use regex::Regex;
use std::sync::OnceLock;

static BEARER_MARKER: OnceLock<Regex> = OnceLock::new();
static USER_ID: OnceLock<Regex> = OnceLock::new();

fn bearer_marker() -> &'static Regex {
    BEARER_MARKER.get_or_init(|| {
        Regex::new(r"Authorization:[ \t\n\r\x0C]*Bearer[ \t\n\r\x0C]*").expect("static pattern")
    })
}

fn user_id() -> &'static Regex {
    USER_ID.get_or_init(|| Regex::new(r"user_id=([0-9]+)").expect("static pattern"))
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Token following the first `Authorization: Bearer` marker, or `""`.
pub fn extract_caller_identity(headers: &str) -> String {
    let Some(marker) = bearer_marker().find(headers) else {
        return String::new();
    };
    let rest = &headers[marker.end()..];
    let end = rest.find(|c: char| !is_token_char(c)).unwrap_or(rest.len());
    rest[..end].to_string()
}

/// Digit run following the first `user_id=` that has one, or `""`.
pub fn extract_resource_identifier(target: &str) -> String {
    user_id()
        .captures(target)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
