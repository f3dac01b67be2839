//! Secret redaction for messages that leave the process.

use once_cell::sync::Lazy;
use regex::Regex;

static API_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"sk-[A-Za-z0-9_-]{8,}").expect("valid API key pattern"));

/// Replace anything that looks like an API key with `sk-REDACTED`
pub fn redact_secrets(message: &str) -> String {
    API_KEY_PATTERN
        .replace_all(message, "sk-REDACTED")
        .into_owned()
}
