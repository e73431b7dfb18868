//! Sentiment classification and aggregation for course feedback and
//! YouTube comments.
//!
//! - `sentiment` - polarity scoring, threshold policies and batch analysis
//! - `store` - the session-scoped feedback store and its aggregate views
//! - `feedback` - validate, score and store one submission
//! - `session` - per-channel session ownership
//! - `youtube` - video id parsing and the comment source
//! - `report` - text renderings for the dashboard

pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod store;
pub mod youtube;

pub use error::{AppError, ConfigError, FetchError, InputError};
pub use models::{Course, FeedbackForm, FeedbackRecord, PolarityScore, SentimentLabel};
pub use sentiment::{BatchSentimentAnalyzer, LexiconScorer, TextPolarityScorer, ThresholdPolicy};
pub use store::FeedbackStore;
