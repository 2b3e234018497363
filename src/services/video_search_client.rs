use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::ProviderError;
use crate::config::YouTubeConfig;
use crate::models::{VideoSearchItem, VideoSearchQuery};

/// A video search provider returning ranked hits for a query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &VideoSearchQuery) -> Result<Vec<VideoSearchItem>, ProviderError>;
}

/// Embeddable playback URL for a YouTube video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

/// YouTube Data API v3 search client
///
/// API Documentation: https://developers.google.com/youtube/v3/docs/search/list
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: SearchResultId,
    #[serde(default)]
    snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    #[serde(default)]
    title: Option<String>,
}

impl YouTubeClient {
    pub fn new(config: &YouTubeConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &VideoSearchQuery) -> Result<Vec<VideoSearchItem>, ProviderError> {
        debug!("Searching videos for {:?}", query.query);

        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query.query.as_str()),
                ("maxResults", max_results.as_str()),
                ("type", query.kind.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("YouTube search request failed: {} - {}", status, error_text);
            return Err(ProviderError::from_response(status, &error_text));
        }

        let search_response = response
            .json::<SearchListResponse>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(search_response
            .items
            .into_iter()
            .map(|item| VideoSearchItem {
                video_id: item.id.video_id,
                title: item.snippet.and_then(|s| s.title),
            })
            .collect())
    }
}
