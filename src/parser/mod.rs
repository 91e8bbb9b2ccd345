//! Pure text layer: line-break normalization, username validation, and
//! candidate extraction from one results blob. No I/O.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MAX_USERNAME_LEN, NOISE_TOKENS};

/// Linux-style local account names: a leading letter or underscore, then
/// letters, digits, underscore, or hyphen, with an optional trailing `$`
/// for machine accounts. Case-insensitive overall.
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z_][a-z0-9_-]*\$?$")
        .expect("username pattern is valid and should always compile")
});

/// Splits a raw results blob into logical lines.
///
/// Scanner exports mix literal escape sequences (`\r\n` and `\n` as
/// two-character text) with real CRLF, CR, and LF bytes. Escaped sequences
/// are rewritten first, then CRLF, then lone CR, so no line is split twice.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    let text = raw
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    text.split('\n').map(|line| line.to_string()).collect()
}

/// Whether a candidate is a header artifact rather than an account name.
pub fn is_noise_token(candidate: &str) -> bool {
    NOISE_TOKENS
        .iter()
        .any(|token| candidate.eq_ignore_ascii_case(token))
}

/// Whether a candidate is a well-formed local account name.
///
/// The 32-character bound is counted here rather than expressed in the
/// pattern.
pub fn is_valid_username(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    if candidate.chars().count() > MAX_USERNAME_LEN {
        return false;
    }
    USERNAME_PATTERN.is_match(candidate)
}

/// Extracts the account names from one results blob, in order of
/// appearance. Blank lines and noise tokens are dropped silently;
/// duplicates are kept.
pub fn extract_usernames(results: &str) -> Vec<String> {
    normalize_lines(results)
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| !is_noise_token(candidate))
        .filter(|candidate| is_valid_username(candidate))
        .collect()
}
