//! Extraction pipeline.
//!
//! One linear pass per request: optional login, shortcode parse, metadata
//! fetch, field derivation, best-effort media download, result assembly.

pub mod caption;
pub mod result;
pub mod shortcode;

use chrono::SecondsFormat;

use crate::api::{PostProvider, PostView};
use crate::download;
use crate::error::Result;
use crate::extract::result::{ExtractRequest, PostExtraction};
use crate::fs;

/// Runs the extraction pipeline against a [`PostProvider`].
pub struct Extractor<P> {
    provider: P,
}

impl<P: PostProvider> Extractor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Extract metadata and media for one post.
    ///
    /// The URL is validated before anything touches the network, so a
    /// malformed URL never triggers a login or fetch. Login only happens
    /// when both credentials are present. Individual media download
    /// failures are non-fatal; a metadata fetch failure fails the call.
    pub async fn extract(&self, request: &ExtractRequest) -> Result<PostExtraction> {
        let shortcode = shortcode::parse_shortcode(&request.url)?;

        if let Some((username, password)) = request.credentials() {
            self.provider.login(username, password).await?;
        }

        let post = self.provider.fetch_post(&shortcode).await?;

        let text = post.caption().to_string();
        let hashtags = caption::extract_hashtags(&text);
        let author = post.owner_username().map(str::to_string);
        let author_url = author
            .as_deref()
            .map(|name| format!("https://instagram.com/{}", name));

        let is_video = post.is_video();
        // A video fetched through its /p/ form is not a reel.
        let is_reel = is_video && shortcode::is_reel_url(&request.url);

        let (image_urls, video_urls) = collect_media_urls(&post);

        let media_dir = fs::media_dir(request.temp_dir.as_deref())?;
        let media_files =
            download::download_all(&self.provider, &image_urls, &video_urls, &media_dir).await;

        Ok(PostExtraction {
            success: true,
            text,
            author,
            author_url,
            hashtags,
            is_reel,
            is_video,
            like_count: post.like_count(),
            comment_count: post.comment_count(),
            timestamp: post
                .taken_at()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            image_urls,
            video_urls,
            media_files,
            post_url: format!("https://www.instagram.com/p/{}/", shortcode),
            shortcode,
        })
    }
}

/// Collect media URLs in document order, images and videos partitioned.
///
/// A single video contributes its video URL; a carousel contributes one URL
/// per child (video or display image); anything else is a single image post
/// contributing its display URL.
fn collect_media_urls(post: &PostView) -> (Vec<String>, Vec<String>) {
    let mut image_urls = Vec::new();
    let mut video_urls = Vec::new();

    if post.is_video() {
        if let Some(url) = post.video_url() {
            video_urls.push(url.to_string());
        }
    } else if post.is_sidecar() {
        for child in post.children() {
            if child.is_video {
                if let Some(url) = &child.video_url {
                    video_urls.push(url.clone());
                }
            } else {
                image_urls.push(child.display_url.clone());
            }
        }
    } else {
        image_urls.push(post.display_url().to_string());
    }

    (image_urls, video_urls)
}
