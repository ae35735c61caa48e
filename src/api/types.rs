//! GraphQL response type definitions for the post query.

use serde::Deserialize;

/// Top-level GraphQL query response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<GraphQlData>,
    pub status: Option<String>,
}

/// Data envelope around the requested media document.
#[derive(Debug, Deserialize)]
pub struct GraphQlData {
    pub shortcode_media: Option<ShortcodeMedia>,
}

/// A post document addressed by shortcode.
///
/// `typename` distinguishes single images (`GraphImage`), single videos
/// (`GraphVideo`) and carousels (`GraphSidecar`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcodeMedia {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub shortcode: String,
    pub display_url: String,
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    pub taken_at_timestamp: Option<i64>,
    pub owner: Option<Owner>,
    #[serde(default)]
    pub edge_media_to_caption: CaptionEdges,
    pub edge_media_preview_like: Option<EdgeCount>,
    pub edge_media_to_comment: Option<EdgeCount>,
    pub edge_sidecar_to_children: Option<SidecarEdges>,
}

/// Post owner account.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub username: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub followed_by_viewer: bool,
}

/// Caption edge list (zero or one edge in practice).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionEdges {
    #[serde(default)]
    pub edges: Vec<CaptionEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionEdge {
    pub node: CaptionNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionNode {
    #[serde(default)]
    pub text: String,
}

/// Count wrapper used by the like and comment edges.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeCount {
    #[serde(default)]
    pub count: u64,
}

/// Carousel children edge list.
#[derive(Debug, Clone, Deserialize)]
pub struct SidecarEdges {
    #[serde(default)]
    pub edges: Vec<SidecarEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidecarEdge {
    pub node: SidecarNode,
}

/// A single carousel child: image or video.
#[derive(Debug, Clone, Deserialize)]
pub struct SidecarNode {
    #[serde(default)]
    pub is_video: bool,
    pub display_url: String,
    pub video_url: Option<String>,
}

/// Login endpoint response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub two_factor_required: bool,
    pub status: Option<String>,
}
