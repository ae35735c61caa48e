//! Error types for the instagram-extractor application.

use thiserror::Error;

/// Main error type for the application.
///
/// Every extraction-level failure is one of these variants; the CLI converts
/// whichever variant it receives into the JSON error payload, so nothing here
/// ever reaches the user as a raw panic or backtrace.
#[derive(Error, Debug)]
pub enum Error {
    // Client construction errors
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    // Authentication errors
    #[error("Invalid Instagram credentials")]
    InvalidCredentials,

    #[error("Two-factor authentication required. Please use the Instagram Basic Display API instead.")]
    TwoFactorRequired,

    // URL errors
    #[error("Invalid Instagram URL format: {0}")]
    MalformedUrl(String),

    // Fetch errors
    #[error("Post not found. It may be private or deleted.")]
    PostNotFound,

    #[error("Post is from a private profile that you don't follow. Login required.")]
    PrivateProfile,

    #[error("Failed to extract post: {0}")]
    Fetch(String),

    // Download errors (fatal setup path only; per-asset download failures
    // are logged and swallowed by the download loop)
    #[error("Download failed: {0}")]
    Download(String),

    // Catch-all for anything unexpected
    #[error("Instagram extraction failed: {0}")]
    Extraction(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
