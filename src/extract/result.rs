//! Request and result types for an extraction run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Error;

/// One extraction request: post URL plus optional credentials.
///
/// Both username and password must be present for login to be attempted;
/// a lone half is treated as anonymous.
#[derive(Debug, Clone, Default)]
pub struct ExtractRequest {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Override for the media directory; a fresh temporary directory is
    /// created when absent.
    pub temp_dir: Option<PathBuf>,
}

impl ExtractRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Credentials, when both halves are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

/// Kind of a downloaded media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A media asset that was downloaded successfully.
#[derive(Debug, Clone, Serialize)]
pub struct MediaFile {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub local_path: PathBuf,
    pub filename: String,
}

/// Successful extraction payload, serialized verbatim to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct PostExtraction {
    pub success: bool,
    pub text: String,
    pub author: Option<String>,
    pub author_url: Option<String>,
    pub hashtags: BTreeSet<String>,
    pub is_reel: bool,
    pub is_video: bool,
    pub like_count: u64,
    pub comment_count: u64,
    pub timestamp: Option<String>,
    pub image_urls: Vec<String>,
    pub video_urls: Vec<String>,
    pub media_files: Vec<MediaFile>,
    pub shortcode: String,
    pub post_url: String,
}

/// Failure payload: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ExtractionFailure {
    pub success: bool,
    pub error: String,
}

impl From<&Error> for ExtractionFailure {
    fn from(err: &Error) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}
