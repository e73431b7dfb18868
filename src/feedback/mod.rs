use chrono::{DateTime, Utc};
use log::info;

use crate::error::InputError;
use crate::models::{FeedbackForm, FeedbackRecord};
use crate::sentiment::{TextPolarityScorer, ThresholdPolicy};
use crate::store::FeedbackStore;

/// Validates, scores and stores a single feedback submission.
///
/// The store is only touched once the record is complete, so a rejected
/// form leaves it exactly as it was.
pub fn submit<'a, S>(
    store: &'a mut FeedbackStore,
    scorer: &S,
    form: FeedbackForm,
) -> Result<&'a FeedbackRecord, InputError>
where
    S: TextPolarityScorer + ?Sized,
{
    submit_at(store, scorer, form, Utc::now())
}

pub fn submit_at<'a, S>(
    store: &'a mut FeedbackStore,
    scorer: &S,
    form: FeedbackForm,
    timestamp: DateTime<Utc>,
) -> Result<&'a FeedbackRecord, InputError>
where
    S: TextPolarityScorer + ?Sized,
{
    let record = analyze(scorer, form, timestamp)?;
    info!(
        "Accepted feedback from {} for {}: {} ({})",
        record.student_id(),
        record.course(),
        record.sentiment(),
        record.polarity()
    );
    store.append(record);
    // append always pushes, so the store cannot be empty here
    Ok(&store.all()[store.len() - 1])
}

/// Builds the record a submission would produce without storing it.
pub fn analyze<S>(
    scorer: &S,
    form: FeedbackForm,
    timestamp: DateTime<Utc>,
) -> Result<FeedbackRecord, InputError>
where
    S: TextPolarityScorer + ?Sized,
{
    let submission = form.validate()?;
    let polarity = scorer.score(submission.feedback());
    let sentiment = ThresholdPolicy::FEEDBACK.classify(polarity);
    Ok(FeedbackRecord::new(submission, sentiment, polarity, timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, PolarityScore, SentimentLabel};
    use crate::sentiment::LexiconScorer;

    struct Constant(f64);

    impl TextPolarityScorer for Constant {
        fn score(&self, _text: &str) -> PolarityScore {
            PolarityScore::new(self.0)
        }
    }

    #[test]
    fn small_polarity_lands_in_the_dead_zone() {
        let mut store = FeedbackStore::new();
        let form = FeedbackForm::new("S7", Course::DataStructures, "fine I guess");
        let record = submit(&mut store, &Constant(0.04), form).unwrap();
        assert_eq!(record.sentiment(), SentimentLabel::Neutral);
        assert_eq!(record.polarity().value(), 0.04);
    }

    #[test]
    fn rejected_form_leaves_store_untouched() {
        let mut store = FeedbackStore::new();
        let form = FeedbackForm::new("", Course::DataStructures, "Great course");
        let err = submit(&mut store, &LexiconScorer::new(), form).unwrap_err();
        assert_eq!(err, InputError::MissingStudentId);
        assert!(store.is_empty());
    }

    #[test]
    fn accepted_form_is_appended_last() {
        let mut store = FeedbackStore::new();
        let scorer = LexiconScorer::new();
        submit(&mut store, &scorer, FeedbackForm::new("S1", Course::WebDevelopment, "terrible")).unwrap();
        let record = submit(
            &mut store,
            &scorer,
            FeedbackForm::new("S2", Course::WebDevelopment, "I love this course, it was amazing"),
        )
        .unwrap();

        assert_eq!(record.student_id(), "S2");
        assert_eq!(record.sentiment(), SentimentLabel::Positive);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].sentiment(), SentimentLabel::Negative);
    }
}
