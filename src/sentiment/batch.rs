use log::debug;
use std::collections::HashMap;

use crate::models::{PolarityScore, SentimentLabel};
use crate::sentiment::classifier::ThresholdPolicy;
use crate::sentiment::scorer::TextPolarityScorer;

/// Label counts that always carry an entry for every label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCounts {
    counts: HashMap<SentimentLabel, usize>,
}

impl Default for SentimentCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentCounts {
    pub fn new() -> Self {
        let mut counts = HashMap::new();

        // Initialize all labels with 0 so tables and charts are complete
        for label in SentimentLabel::ALL {
            counts.insert(label, 0);
        }

        Self { counts }
    }

    pub fn increment(&mut self, label: SentimentLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Share of `label` in percent, 0.0 when nothing was counted.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 * 100.0 / total as f64
    }

    /// Highest count wins; ties go to the earlier label in display order.
    pub fn most_frequent(&self) -> Option<SentimentLabel> {
        if self.total() == 0 {
            return None;
        }
        SentimentLabel::ALL
            .into_iter()
            .fold(None, |best: Option<SentimentLabel>, label| match best {
                Some(current) if self.get(current) >= self.get(label) => Some(current),
                _ => Some(label),
            })
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

impl FromIterator<SentimentLabel> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut counts = SentimentCounts::new();
        for label in iter {
            counts.increment(label);
        }
        counts
    }
}

/// One analysed comment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredText {
    pub text: String,
    pub polarity: PolarityScore,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    counts: SentimentCounts,
    items: Vec<ScoredText>,
}

impl BatchAnalysis {
    pub fn counts(&self) -> &SentimentCounts {
        &self.counts
    }

    pub fn items(&self) -> &[ScoredText] {
        &self.items
    }

    /// Polarities aligned by index with the input texts.
    pub fn polarities(&self) -> Vec<PolarityScore> {
        self.items.iter().map(|item| item.polarity).collect()
    }

    /// Labels aligned by index with the input texts.
    pub fn labels(&self) -> Vec<SentimentLabel> {
        self.items.iter().map(|item| item.label).collect()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Average tone of the batch. An empty batch reports 0.0 for display only.
    pub fn mean_polarity(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.items.iter().map(|item| item.polarity.value()).sum();
        sum / self.items.len() as f64
    }

    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        self.counts.percentage(label)
    }
}

/// Scores and labels a batch of comments under the strict sign policy.
pub struct BatchSentimentAnalyzer<S> {
    scorer: S,
    policy: ThresholdPolicy,
}

impl<S: TextPolarityScorer> BatchSentimentAnalyzer<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            policy: ThresholdPolicy::COMMENTS,
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn analyze<I, T>(&self, texts: I) -> BatchAnalysis
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut counts = SentimentCounts::new();
        let mut items = Vec::new();

        for text in texts {
            let text = text.into();
            let polarity = self.scorer.score(&text);
            let label = self.policy.classify(polarity);
            counts.increment(label);
            items.push(ScoredText { text, polarity, label });
        }

        debug!(
            "Analysed batch of {} texts: {} positive, {} negative, {} neutral",
            items.len(),
            counts.get(SentimentLabel::Positive),
            counts.get(SentimentLabel::Negative),
            counts.get(SentimentLabel::Neutral)
        );

        BatchAnalysis { counts, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::scorer::LexiconScorer;

    /// Scores every text by a fixed table, 0.0 otherwise.
    struct FixtureScorer(Vec<(&'static str, f64)>);

    impl TextPolarityScorer for FixtureScorer {
        fn score(&self, text: &str) -> PolarityScore {
            let value = self
                .0
                .iter()
                .find(|(t, _)| *t == text)
                .map(|(_, v)| *v)
                .unwrap_or(0.0);
            PolarityScore::new(value)
        }
    }

    #[test]
    fn empty_batch_has_complete_zero_counts() {
        let analyzer = BatchSentimentAnalyzer::new(LexiconScorer::new());
        let result = analyzer.analyze(Vec::<String>::new());

        for label in SentimentLabel::ALL {
            assert_eq!(result.counts().get(label), 0);
        }
        assert!(result.polarities().is_empty());
        assert!(result.labels().is_empty());
        assert_eq!(result.mean_polarity(), 0.0);
        assert_eq!(result.percentage(SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn small_positive_scores_count_as_positive() {
        let analyzer = BatchSentimentAnalyzer::new(FixtureScorer(vec![("meh", 0.01), ("hmm", -0.02)]));
        let result = analyzer.analyze(["meh", "hmm", "plain"]);

        assert_eq!(
            result.labels(),
            vec![SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral]
        );
        assert_eq!(result.counts().total(), 3);
    }

    #[test]
    fn results_are_aligned_with_input() {
        let analyzer = BatchSentimentAnalyzer::new(FixtureScorer(vec![("a", 0.5), ("b", -0.25)]));
        let result = analyzer.analyze(vec!["b".to_string(), "a".to_string()]);

        assert_eq!(result.items()[0].text, "b");
        assert_eq!(result.polarities(), vec![PolarityScore::new(-0.25), PolarityScore::new(0.5)]);
        assert!((result.mean_polarity() - 0.125).abs() < 1e-9);
    }

    #[test]
    fn most_frequent_prefers_display_order_on_ties() {
        let counts: SentimentCounts = [SentimentLabel::Neutral, SentimentLabel::Negative]
            .into_iter()
            .collect();
        assert_eq!(counts.most_frequent(), Some(SentimentLabel::Negative));
        assert_eq!(SentimentCounts::new().most_frequent(), None);
    }

    #[test]
    fn percentages_follow_counts() {
        let counts: SentimentCounts = [
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
        ]
        .into_iter()
        .collect();
        assert_eq!(counts.percentage(SentimentLabel::Positive), 75.0);
        assert_eq!(counts.percentage(SentimentLabel::Negative), 0.0);
    }
}
