//! Shortcode parsing from post and reel URLs.

use crate::error::{Error, Result};

/// URL path markers that precede a shortcode.
const POST_MARKER: &str = "/p/";
const REEL_MARKER: &str = "/reel/";

/// Parse the shortcode out of a post or reel URL.
///
/// Accepts `https://www.instagram.com/p/SHORTCODE/` and
/// `https://www.instagram.com/reel/SHORTCODE/` forms; trailing path segments
/// and query strings are ignored. Pure string work, no network involved.
pub fn parse_shortcode(url: &str) -> Result<String> {
    let rest = if let Some((_, rest)) = url.split_once(POST_MARKER) {
        rest
    } else if let Some((_, rest)) = url.split_once(REEL_MARKER) {
        rest
    } else {
        return Err(Error::MalformedUrl(url.to_string()));
    };

    let shortcode = rest
        .split('/')
        .next()
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("");

    if shortcode.is_empty() {
        return Err(Error::MalformedUrl(url.to_string()));
    }

    Ok(shortcode.to_string())
}

/// Whether the URL addresses the post through its reel form.
pub fn is_reel_url(url: &str) -> bool {
    url.contains(REEL_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_url() {
        let code = parse_shortcode("https://www.instagram.com/p/ABC123/").unwrap();
        assert_eq!(code, "ABC123");
    }

    #[test]
    fn test_parse_reel_url_with_query() {
        let code = parse_shortcode("https://www.instagram.com/reel/XYZ789?utm=1").unwrap();
        assert_eq!(code, "XYZ789");
    }

    #[test]
    fn test_parse_without_trailing_slash() {
        let code = parse_shortcode("https://instagram.com/p/DEF456").unwrap();
        assert_eq!(code, "DEF456");
    }

    #[test]
    fn test_parse_rejects_unknown_path() {
        let err = parse_shortcode("https://www.instagram.com/stories/user/123/").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl(_)));
    }

    #[test]
    fn test_parse_rejects_empty_shortcode() {
        let err = parse_shortcode("https://www.instagram.com/p//").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl(_)));

        let err = parse_shortcode("https://www.instagram.com/p/?utm=1").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl(_)));
    }

    #[test]
    fn test_is_reel_url() {
        assert!(is_reel_url("https://www.instagram.com/reel/XYZ789/"));
        assert!(!is_reel_url("https://www.instagram.com/p/ABC123/"));
    }
}
