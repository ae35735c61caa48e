//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::extract::result::ExtractRequest;

/// Instagram content extractor CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-extractor",
    version,
    about = "Extract metadata and media from an Instagram post or reel",
    long_about = "Extracts caption, author, hashtags, engagement counts and media URLs from an\n\
                  Instagram post or reel, downloads the media to a temporary directory, and\n\
                  prints a JSON summary on stdout. The media directory is left in place for\n\
                  the caller to clean up."
)]
pub struct Args {
    /// Instagram post/reel URL.
    pub url: String,

    /// Instagram username (optional, for private posts).
    #[arg(long, env = "INSTAGRAM_USERNAME")]
    pub username: Option<String>,

    /// Instagram password (optional, for private posts).
    #[arg(long, env = "INSTAGRAM_PASSWORD")]
    pub password: Option<String>,

    /// Directory for downloaded media (defaults to a fresh temporary directory).
    #[arg(long = "temp-dir")]
    pub temp_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the extraction request from parsed arguments.
    pub fn into_request(self) -> ExtractRequest {
        ExtractRequest {
            url: self.url,
            username: self.username,
            password: self.password,
            temp_dir: self.temp_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_only() {
        let args =
            Args::try_parse_from(["instagram-extractor", "https://www.instagram.com/p/ABC/"])
                .unwrap();
        assert_eq!(args.url, "https://www.instagram.com/p/ABC/");
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_full_flags() {
        let args = Args::try_parse_from([
            "instagram-extractor",
            "https://www.instagram.com/reel/XYZ/",
            "--username",
            "alice",
            "--password",
            "secret",
            "--temp-dir",
            "/tmp/media",
            "--debug",
        ])
        .unwrap();

        let debug = args.debug;
        let request = args.into_request();
        assert_eq!(request.credentials(), Some(("alice", "secret")));
        assert_eq!(request.temp_dir, Some(PathBuf::from("/tmp/media")));
        assert!(debug);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Args::try_parse_from(["instagram-extractor"]).is_err());
    }
}
