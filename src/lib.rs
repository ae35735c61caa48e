//! Instagram Extractor — metadata and media extraction for posts and reels.
//!
//! Given a post or reel URL (and optional credentials for private content),
//! this library resolves the shortcode, fetches the post document, derives
//! structured fields (caption, hashtags, author, media URLs), downloads the
//! referenced media to a temporary directory, and returns a structured
//! result. The CLI binary serializes that result as pretty-printed JSON.
//!
//! # Example
//!
//! ```no_run
//! use instagram_extractor::{ExtractRequest, Extractor, InstagramApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = InstagramApi::new()?;
//!     let extractor = Extractor::new(api);
//!     let request = ExtractRequest::new("https://www.instagram.com/p/ABC123/");
//!     let result = extractor.extract(&request).await?;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod download;
pub mod error;
pub mod extract;
pub mod fs;

// Re-exports for convenience
pub use api::{InstagramApi, PostProvider, PostView};
pub use error::{Error, Result};
pub use extract::result::{ExtractRequest, ExtractionFailure, MediaFile, MediaKind, PostExtraction};
pub use extract::Extractor;
