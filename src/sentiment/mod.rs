pub mod batch;
pub mod classifier;
pub mod lexicon;
pub mod scorer;

pub use batch::{BatchAnalysis, BatchSentimentAnalyzer, ScoredText, SentimentCounts};
pub use classifier::{classify, ThresholdPolicy, FEEDBACK_DEAD_ZONE};
pub use scorer::{LexiconScorer, TextPolarityScorer};

use std::sync::Arc;

use crate::models::PolarityScore;

impl<S: TextPolarityScorer + ?Sized> TextPolarityScorer for Arc<S> {
    fn score(&self, text: &str) -> PolarityScore {
        (**self).score(text)
    }
}

impl<S: TextPolarityScorer + ?Sized> TextPolarityScorer for &S {
    fn score(&self, text: &str) -> PolarityScore {
        (**self).score(text)
    }
}
