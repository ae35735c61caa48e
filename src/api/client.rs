//! Instagram web API HTTP client.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::auth::{encode_password_now, extract_csrf_token};
use crate::api::post::PostView;
use crate::api::types::{GraphQlResponse, LoginResponse};
use crate::api::PostProvider;
use crate::error::{Error, Result};

/// Instagram web base URL.
const WEB_BASE: &str = "https://www.instagram.com";

/// Public web application ID, sent with every API request.
const APP_ID: &str = "936619743392459";

/// GraphQL query hash for the media-by-shortcode document.
const POST_QUERY_HASH: &str = "b3055c01b4b222b8a47dc12b090e4e64";

/// Browser user agent for all requests.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Connection attempts per request. The only retry policy in the system.
const MAX_CONNECTION_ATTEMPTS: u32 = 3;

/// Instagram web API client with cookie-based session state.
pub struct InstagramApi {
    client: Client,
}

impl InstagramApi {
    /// Create a new API client.
    ///
    /// No file persistence of any kind is configured: media download is the
    /// extraction pipeline's job, and session cookies live only in memory.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }

    /// Send a request, retrying transport-level failures up to the
    /// connection-attempt cap. HTTP error statuses are not retried.
    async fn send_with_retry(&self, request: RequestBuilder) -> Result<Response> {
        let mut last_err: Option<reqwest::Error> = None;

        for attempt in 1..=MAX_CONNECTION_ATTEMPTS {
            let Some(req) = request.try_clone() else {
                // Non-cloneable request bodies can't be replayed.
                return Ok(request.send().await?);
            };

            match req.send().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::debug!(
                        "Connection attempt {}/{} failed: {}",
                        attempt,
                        MAX_CONNECTION_ATTEMPTS,
                        e
                    );
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) => Err(Error::Http(e)),
            None => Err(Error::Fetch("no connection attempt was made".to_string())),
        }
    }
}

#[async_trait]
impl PostProvider for InstagramApi {
    /// Authenticate the session via the web login endpoint.
    async fn login(&self, username: &str, password: &str) -> Result<()> {
        // Bootstrap request to obtain a CSRF token (also seeds cookies).
        let bootstrap = self
            .send_with_retry(self.client.get(format!("{}/", WEB_BASE)))
            .await?;
        let csrf_token = extract_csrf_token(bootstrap.headers())
            .ok_or_else(|| Error::Fetch("No CSRF token in login bootstrap response".to_string()))?;

        let response = self
            .send_with_retry(
                self.client
                    .post(format!("{}/api/v1/web/login/ajax/", WEB_BASE))
                    .header("X-CSRFToken", &csrf_token)
                    .header("X-IG-App-ID", APP_ID)
                    .header("Referer", format!("{}/accounts/login/", WEB_BASE))
                    .form(&[
                        ("username", username),
                        ("enc_password", &encode_password_now(password)),
                    ]),
            )
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Login response ({}): {}", status, text);

        let login: LoginResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Fetch(format!("Failed to parse login response: {}", e)))?;

        if login.two_factor_required {
            return Err(Error::TwoFactorRequired);
        }
        if !login.authenticated {
            return Err(Error::InvalidCredentials);
        }

        tracing::debug!("Logged in as {}", username);
        Ok(())
    }

    /// Fetch a post document by shortcode via the GraphQL query endpoint.
    async fn fetch_post(&self, shortcode: &str) -> Result<PostView> {
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();
        let response = self
            .send_with_retry(
                self.client
                    .get(format!("{}/graphql/query/", WEB_BASE))
                    .header("X-IG-App-ID", APP_ID)
                    .query(&[("query_hash", POST_QUERY_HASH), ("variables", &variables)]),
            )
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::PostNotFound);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(Error::PrivateProfile);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Fetch(format!("HTTP {}: {}", status, body)));
        }

        let text = response.text().await?;
        let graphql: GraphQlResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Fetch(format!("Failed to parse post response: {}", e)))?;

        let media = graphql
            .data
            .and_then(|d| d.shortcode_media)
            .ok_or(Error::PostNotFound)?;

        let view = PostView::new(media);
        if view.is_private_not_followed() {
            return Err(Error::PrivateProfile);
        }

        Ok(view)
    }

    /// Download a media file, streaming the body to `dest`.
    async fn download_file(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self.send_with_retry(self.client.get(url)).await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!("HTTP {}", response.status())));
        }

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;
        Ok(())
    }
}
