//! Hashtag extraction from caption text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();

/// Extract hashtags from a caption: `#` followed by one or more word
/// characters, case-sensitive, deduplicated. The sorted set keeps the JSON
/// output deterministic.
pub fn extract_hashtags(caption: &str) -> BTreeSet<String> {
    let re = HASHTAG_RE.get_or_init(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));
    re.find_iter(caption)
        .map(|m| m.as_str().to_string())
        .collect()
}
