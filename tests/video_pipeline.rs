use async_trait::async_trait;
use std::sync::Mutex;

use sentiment_board::youtube::{analyze_video, CommentSource, VideoId};
use sentiment_board::{AppError, BatchSentimentAnalyzer, FetchError, InputError, LexiconScorer, SentimentLabel};

/// Serves canned comments and remembers what it was asked for.
struct CannedComments {
    result: Result<Vec<String>, FetchError>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl CannedComments {
    fn new(result: Result<Vec<&str>, FetchError>) -> Self {
        Self {
            result: result.map(|comments| comments.into_iter().map(String::from).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSource for CannedComments {
    async fn fetch(&self, video_id: &VideoId, max_count: u32) -> Result<Vec<String>, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((video_id.to_string(), max_count));
        self.result.clone()
    }
}

#[tokio::test]
async fn analyzes_fetched_comments() {
    let source = CannedComments::new(Ok(vec!["great!", "terrible.", "ok", "really good video"]));
    let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());

    let video = analyze_video(&source, &analyzer, "https://youtu.be/dQw4w9WgXcQ", 50)
        .await
        .unwrap();

    assert_eq!(video.video_id.as_str(), "dQw4w9WgXcQ");
    assert_eq!(source.requests(), vec![("dQw4w9WgXcQ".to_string(), 50)]);
    assert_eq!(video.analysis.total(), 4);
    assert_eq!(video.analysis.counts().get(SentimentLabel::Positive), 2);
    assert_eq!(video.analysis.counts().get(SentimentLabel::Negative), 1);
    assert_eq!(video.analysis.counts().get(SentimentLabel::Neutral), 1);
    assert_eq!(video.analysis.items()[3].text, "really good video");
}

#[tokio::test]
async fn invalid_link_never_reaches_the_source() {
    let source = CannedComments::new(Ok(vec!["great!"]));
    let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());

    let err = analyze_video(&source, &analyzer, "https://example.com/nope", 50)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Input(InputError::InvalidVideoId(_))));
    assert!(source.requests().is_empty());
}

#[tokio::test]
async fn fetch_errors_abort_the_analysis() {
    let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());

    for (failure, prefix) in [
        (FetchError::NotFound, "Error 404"),
        (FetchError::CommentsDisabled, "Error 403"),
        (FetchError::Other("HTTP 500: boom".into()), "An API error occurred"),
    ] {
        let source = CannedComments::new(Err(failure.clone()));
        let err = analyze_video(&source, &analyzer, "dQw4w9WgXcQ", 20)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Fetch(failure));
        assert!(err.user_message().starts_with(prefix));
    }
}

#[tokio::test]
async fn empty_comment_list_reports_zero_mean() {
    let source = CannedComments::new(Ok(vec![]));
    let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());

    let video = analyze_video(&source, &analyzer, "dQw4w9WgXcQ", 10).await.unwrap();
    assert!(video.analysis.is_empty());
    assert_eq!(video.analysis.mean_polarity(), 0.0);
    assert_eq!(video.analysis.counts().total(), 0);
}
