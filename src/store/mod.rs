pub mod export;

use std::collections::HashMap;

use crate::models::{Course, FeedbackRecord, SentimentLabel};
use crate::sentiment::SentimentCounts;

/// Counts per (course, label); combinations never seen read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSentimentCounts {
    counts: HashMap<(Course, SentimentLabel), usize>,
}

impl CourseSentimentCounts {
    pub fn get(&self, course: Course, label: SentimentLabel) -> usize {
        self.counts.get(&(course, label)).copied().unwrap_or(0)
    }

    pub fn course_total(&self, course: Course) -> usize {
        SentimentLabel::ALL
            .into_iter()
            .map(|label| self.get(course, label))
            .sum()
    }

    /// Counts for one course with every label present.
    pub fn for_course(&self, course: Course) -> SentimentCounts {
        let mut counts = SentimentCounts::new();
        for label in SentimentLabel::ALL {
            for _ in 0..self.get(course, label) {
                counts.increment(label);
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn increment(&mut self, course: Course, label: SentimentLabel) {
        *self.counts.entry((course, label)).or_insert(0) += 1;
    }
}

/// Summary of the store at the moment it was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateView {
    pub total: usize,
    pub by_sentiment: SentimentCounts,
    pub by_course: CourseSentimentCounts,
    pub mean_polarity: f64,
    pub most_frequent: Option<SentimentLabel>,
    pub courses: Vec<Course>,
}

/// Feedback collected during one session.
///
/// Records are only ever appended; every aggregate is recomputed from the
/// full record list when asked for.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    records: Vec<FeedbackRecord>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: FeedbackRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&FeedbackRecord> {
        self.records.last()
    }

    pub fn aggregate_by_sentiment(&self) -> SentimentCounts {
        self.records.iter().map(|record| record.sentiment()).collect()
    }

    pub fn aggregate_by_course_sentiment(&self) -> CourseSentimentCounts {
        let mut counts = CourseSentimentCounts::default();
        for record in &self.records {
            counts.increment(record.course(), record.sentiment());
        }
        counts
    }

    pub fn mean_polarity(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(|record| record.polarity().value()).sum();
        sum / self.records.len() as f64
    }

    pub fn filter_by_course(&self, course: Course) -> Vec<&FeedbackRecord> {
        self.records
            .iter()
            .filter(|record| record.course() == course)
            .collect()
    }

    /// Distinct courses in order of first submission.
    pub fn courses(&self) -> Vec<Course> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.course()) {
                seen.push(record.course());
            }
        }
        seen
    }

    pub fn aggregate(&self) -> AggregateView {
        let by_sentiment = self.aggregate_by_sentiment();
        AggregateView {
            total: self.records.len(),
            most_frequent: by_sentiment.most_frequent(),
            by_sentiment,
            by_course: self.aggregate_by_course_sentiment(),
            mean_polarity: self.mean_polarity(),
            courses: self.courses(),
        }
    }
}
