//! Accessor wrapper over the fetched post document.

use chrono::{DateTime, TimeZone, Utc};

use crate::api::types::{ShortcodeMedia, SidecarNode};

/// Typename Instagram uses for carousel posts.
const SIDECAR_TYPENAME: &str = "GraphSidecar";

/// Read-only view of a fetched post.
///
/// Wraps the raw GraphQL document and exposes the handful of fields the
/// extraction pipeline cares about, with absent-field defaults applied.
#[derive(Debug, Clone)]
pub struct PostView {
    media: ShortcodeMedia,
}

impl PostView {
    pub fn new(media: ShortcodeMedia) -> Self {
        Self { media }
    }

    /// Caption text, empty string when the post has no caption.
    pub fn caption(&self) -> &str {
        self.media
            .edge_media_to_caption
            .edges
            .first()
            .map(|e| e.node.text.as_str())
            .unwrap_or("")
    }

    pub fn owner_username(&self) -> Option<&str> {
        self.media.owner.as_ref().and_then(|o| o.username.as_deref())
    }

    /// True when the owner is private and the viewer does not follow them.
    pub fn is_private_not_followed(&self) -> bool {
        self.media
            .owner
            .as_ref()
            .map(|o| o.is_private && !o.followed_by_viewer)
            .unwrap_or(false)
    }

    pub fn is_video(&self) -> bool {
        self.media.is_video
    }

    /// True for multi-item carousel posts.
    pub fn is_sidecar(&self) -> bool {
        self.media.typename == SIDECAR_TYPENAME
    }

    pub fn display_url(&self) -> &str {
        &self.media.display_url
    }

    pub fn video_url(&self) -> Option<&str> {
        self.media.video_url.as_deref()
    }

    pub fn like_count(&self) -> u64 {
        self.media
            .edge_media_preview_like
            .as_ref()
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn comment_count(&self) -> u64 {
        self.media
            .edge_media_to_comment
            .as_ref()
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Post creation time, when the document carries a timestamp.
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        self.media
            .taken_at_timestamp
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }

    /// Carousel children in document order; empty for non-carousel posts.
    pub fn children(&self) -> impl Iterator<Item = &SidecarNode> {
        self.media
            .edge_sidecar_to_children
            .iter()
            .flat_map(|s| s.edges.iter())
            .map(|e| &e.node)
    }
}
