pub mod video_id;

pub use video_id::{extract_video_id, VideoId};

use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, FetchError};
use crate::sentiment::{BatchAnalysis, BatchSentimentAnalyzer, TextPolarityScorer};

const COMMENT_THREADS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// The API refuses larger pages.
pub const MAX_RESULTS_LIMIT: u32 = 100;

const REQUEST_TIMEOUT_SECS: u64 = 30;

// Sent as a header so the key never appears in a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where raw comment texts come from.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch(&self, video_id: &VideoId, max_count: u32) -> Result<Vec<String>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct CommentThreadList {
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Client for the YouTube Data API v3 comment threads endpoint.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: COMMENT_THREADS_URL.to_string(),
        })
    }
}

#[async_trait]
impl CommentSource for YouTubeClient {
    async fn fetch(&self, video_id: &VideoId, max_count: u32) -> Result<Vec<String>, FetchError> {
        let max_results = max_count.clamp(1, MAX_RESULTS_LIMIT).to_string();
        info!("Fetching up to {} comments for video {}", max_results, video_id);

        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("part", "snippet"),
                ("videoId", video_id.as_str()),
                ("maxResults", max_results.as_str()),
                ("textFormat", "plainText"),
            ],
        )
        .map_err(|e| FetchError::Other(format!("Invalid request URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = classify_api_error(status, &body);
            error!("Comment fetch for {} failed with {}: {}", video_id, status, err);
            return Err(err);
        }

        parse_comment_threads(&body)
    }
}

/// Maps a failed API response onto the three fetch error kinds.
pub fn classify_api_error(status: StatusCode, body: &str) -> FetchError {
    let envelope: Option<ErrorEnvelope> = serde_json::from_str(body).ok();
    let has_reason = |reason: &str| {
        envelope
            .as_ref()
            .map(|e| e.error.errors.iter().any(|detail| detail.reason == reason))
            .unwrap_or(false)
    };

    if status == StatusCode::NOT_FOUND && has_reason("videoNotFound") {
        return FetchError::NotFound;
    }
    if status == StatusCode::FORBIDDEN && has_reason("commentsDisabled") {
        return FetchError::CommentsDisabled;
    }

    let message = envelope
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect());
    FetchError::Other(format!("HTTP {}: {}", status.as_u16(), message))
}

fn parse_comment_threads(body: &str) -> Result<Vec<String>, FetchError> {
    let list: CommentThreadList = serde_json::from_str(body)
        .map_err(|e| FetchError::Other(format!("Invalid response format: {}", e)))?;

    Ok(list
        .items
        .into_iter()
        .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
        .collect())
}

/// What the comment analysis reports for one video.
#[derive(Debug, Clone)]
pub struct VideoAnalysis {
    pub video_id: VideoId,
    pub analysis: BatchAnalysis,
}

/// Resolves the link, fetches comments and analyses them.
///
/// Stops at the first failure; no partial analysis is produced.
pub async fn analyze_video<C, S>(
    source: &C,
    analyzer: &BatchSentimentAnalyzer<S>,
    url_or_id: &str,
    max_count: u32,
) -> Result<VideoAnalysis, AppError>
where
    C: CommentSource + ?Sized,
    S: TextPolarityScorer,
{
    let video_id = extract_video_id(url_or_id)?;
    let comments = source.fetch(&video_id, max_count).await?;
    info!("Fetched {} comments for video {}", comments.len(), video_id);

    Ok(VideoAnalysis {
        analysis: analyzer.analyze(comments),
        video_id,
    })
}
