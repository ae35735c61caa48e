//! Login helpers: password encoding and CSRF token extraction.

use chrono::Utc;
use reqwest::header::{HeaderMap, SET_COOKIE};

/// Encode a password in the browser login format.
///
/// The web login endpoint rejects plaintext passwords; the unencrypted
/// browser envelope (version 0) is accepted and avoids carrying a full
/// client-side encryption implementation.
pub fn encode_password(password: &str, timestamp: i64) -> String {
    format!("#PWD_INSTAGRAM_BROWSER:0:{}:{}", timestamp, password)
}

/// Encode a password using the current time.
pub fn encode_password_now(password: &str) -> String {
    encode_password(password, Utc::now().timestamp())
}

/// Pull the csrftoken value out of Set-Cookie response headers.
pub fn extract_csrf_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            cookie
                .strip_prefix("csrftoken=")
                .and_then(|rest| rest.split(';').next())
                .filter(|token| !token.is_empty())
                .map(str::to_string)
        })
}
