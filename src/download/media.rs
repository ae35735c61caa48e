//! Sequential media file downloading.

use std::path::Path;

use crate::api::PostProvider;
use crate::extract::result::{MediaFile, MediaKind};

/// Download all collected media URLs into `target_dir`.
///
/// Images then videos, each 1-indexed in its own sequence with predictable
/// filenames (`image_<n>.jpg`, `video_<n>.mp4`). A failed download is
/// reported as a warning and omitted from the returned list; remaining
/// assets are still attempted.
pub async fn download_all<P: PostProvider>(
    provider: &P,
    image_urls: &[String],
    video_urls: &[String],
    target_dir: &Path,
) -> Vec<MediaFile> {
    let mut files = Vec::with_capacity(image_urls.len() + video_urls.len());

    for (idx, url) in image_urls.iter().enumerate() {
        let filename = format!("image_{}.jpg", idx + 1);
        if let Some(file) =
            download_one(provider, url, target_dir, filename, MediaKind::Image).await
        {
            files.push(file);
        }
    }

    for (idx, url) in video_urls.iter().enumerate() {
        let filename = format!("video_{}.mp4", idx + 1);
        if let Some(file) =
            download_one(provider, url, target_dir, filename, MediaKind::Video).await
        {
            files.push(file);
        }
    }

    files
}

async fn download_one<P: PostProvider>(
    provider: &P,
    url: &str,
    target_dir: &Path,
    filename: String,
    kind: MediaKind,
) -> Option<MediaFile> {
    let local_path = target_dir.join(&filename);

    match provider.download_file(url, &local_path).await {
        Ok(()) => {
            tracing::debug!("Downloaded {}", local_path.display());
            Some(MediaFile {
                kind,
                url: url.to_string(),
                local_path,
                filename,
            })
        }
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", filename, e);
            None
        }
    }
}
