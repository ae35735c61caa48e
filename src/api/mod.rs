//! Instagram web API module.
//!
//! This module provides:
//! - HTTP client for the Instagram web endpoints
//! - Login flow (CSRF bootstrap + password encoding)
//! - GraphQL response types and the `PostView` accessor wrapper

pub mod auth;
pub mod client;
pub mod post;
pub mod types;

pub use client::InstagramApi;
pub use post::PostView;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Capability surface the extraction pipeline depends on.
///
/// The pipeline only ever talks to this trait, so the concrete client can be
/// swapped (or mocked in tests) without touching extraction logic.
#[async_trait]
pub trait PostProvider {
    /// Authenticate a session with username and password.
    async fn login(&self, username: &str, password: &str) -> Result<()>;

    /// Fetch the post addressed by `shortcode`.
    async fn fetch_post(&self, shortcode: &str) -> Result<PostView>;

    /// Download a media file to `dest`.
    async fn download_file(&self, url: &str, dest: &Path) -> Result<()>;
}
