use proptest::prelude::*;
use sentiment_board::feedback;
use sentiment_board::sentiment::{classify, FEEDBACK_DEAD_ZONE};
use sentiment_board::{
    BatchSentimentAnalyzer, Course, FeedbackForm, FeedbackStore, LexiconScorer, PolarityScore,
    SentimentLabel, TextPolarityScorer, ThresholdPolicy,
};

fn course_strategy() -> impl Strategy<Value = Course> {
    prop::sample::select(Course::ALL.to_vec())
}

proptest! {
    #[test]
    fn score_is_bounded(text in ".*") {
        let score = LexiconScorer::new().score(&text).value();
        prop_assert!(score.abs() <= 1.0, "score {} out of range for {:?}", score, text);
    }

    #[test]
    fn lexicon_words_keep_score_bounded(words in prop::collection::vec(
        prop::sample::select(vec!["very", "not", "awesome", "terrible", "extremely", "good", "the", "boring"]),
        0..30,
    )) {
        let text = words.join(" ");
        let score = LexiconScorer::new().score(&text).value();
        prop_assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn policies_agree_outside_dead_zone(value in -1.0f64..=1.0) {
        let score = PolarityScore::new(value);
        let strict = classify(score, ThresholdPolicy::StrictSign);
        let dead_zone = classify(score, ThresholdPolicy::FEEDBACK);
        if value.abs() > FEEDBACK_DEAD_ZONE {
            prop_assert_eq!(strict, dead_zone);
        } else if strict != dead_zone {
            prop_assert_eq!(dead_zone, SentimentLabel::Neutral);
            prop_assert!(value != 0.0);
        }
    }

    #[test]
    fn batch_counts_sum_to_input_length(texts in prop::collection::vec(".{0,40}", 0..25)) {
        let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());
        let result = analyzer.analyze(texts.clone());
        prop_assert_eq!(result.counts().total(), texts.len());
        prop_assert_eq!(result.polarities().len(), texts.len());
        prop_assert_eq!(result.labels().len(), texts.len());
    }

    #[test]
    fn store_aggregate_sums_to_appends(
        entries in prop::collection::vec((course_strategy(), "[a-z ]{1,30}"), 0..20)
    ) {
        let mut store = FeedbackStore::new();
        let scorer = LexiconScorer::new();
        let mut accepted = 0;
        for (i, (course, text)) in entries.iter().enumerate() {
            let form = FeedbackForm::new(format!("S{}", i), *course, text.clone());
            if feedback::submit(&mut store, &scorer, form).is_ok() {
                accepted += 1;
            }
        }
        prop_assert_eq!(store.len(), accepted);
        prop_assert_eq!(store.aggregate_by_sentiment().total(), accepted);
        prop_assert_eq!(store.aggregate_by_course_sentiment().total(), accepted);
        let per_course: usize = Course::ALL.iter().map(|c| store.filter_by_course(*c).len()).sum();
        prop_assert_eq!(per_course, accepted);
    }
}
