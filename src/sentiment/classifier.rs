use crate::models::{PolarityScore, SentimentLabel};

/// Width of the neutral band used for individual feedback.
pub const FEEDBACK_DEAD_ZONE: f64 = 0.05;

/// How a polarity is turned into a label.
///
/// Batch comment analysis and single feedback submissions use different
/// policies; the two are kept as separate variants on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdPolicy {
    /// Neutral only when the score is exactly zero.
    StrictSign,
    /// Neutral for any score within `[-epsilon, epsilon]`.
    DeadZone { epsilon: f64 },
}

impl ThresholdPolicy {
    pub const COMMENTS: ThresholdPolicy = ThresholdPolicy::StrictSign;
    pub const FEEDBACK: ThresholdPolicy = ThresholdPolicy::DeadZone {
        epsilon: FEEDBACK_DEAD_ZONE,
    };

    pub fn classify(self, score: PolarityScore) -> SentimentLabel {
        let value = score.value();
        match self {
            ThresholdPolicy::StrictSign => {
                if value > 0.0 {
                    SentimentLabel::Positive
                } else if value < 0.0 {
                    SentimentLabel::Negative
                } else {
                    SentimentLabel::Neutral
                }
            }
            ThresholdPolicy::DeadZone { epsilon } => {
                if value > epsilon {
                    SentimentLabel::Positive
                } else if value < -epsilon {
                    SentimentLabel::Negative
                } else {
                    SentimentLabel::Neutral
                }
            }
        }
    }
}

pub fn classify(score: PolarityScore, policy: ThresholdPolicy) -> SentimentLabel {
    policy.classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: f64, policy: ThresholdPolicy) -> SentimentLabel {
        classify(PolarityScore::new(value), policy)
    }

    #[test]
    fn strict_sign_only_zero_is_neutral() {
        assert_eq!(label(0.0, ThresholdPolicy::StrictSign), SentimentLabel::Neutral);
        assert_eq!(label(0.001, ThresholdPolicy::StrictSign), SentimentLabel::Positive);
        assert_eq!(label(-0.001, ThresholdPolicy::StrictSign), SentimentLabel::Negative);
    }

    #[test]
    fn dead_zone_boundaries_are_neutral() {
        let policy = ThresholdPolicy::FEEDBACK;
        assert_eq!(label(0.05, policy), SentimentLabel::Neutral);
        assert_eq!(label(-0.05, policy), SentimentLabel::Neutral);
        assert_eq!(label(0.0501, policy), SentimentLabel::Positive);
        assert_eq!(label(-0.0501, policy), SentimentLabel::Negative);
    }

    #[test]
    fn policies_disagree_inside_the_band() {
        assert_eq!(label(0.03, ThresholdPolicy::COMMENTS), SentimentLabel::Positive);
        assert_eq!(label(0.03, ThresholdPolicy::FEEDBACK), SentimentLabel::Neutral);
    }

    #[test]
    fn custom_epsilon() {
        let wide = ThresholdPolicy::DeadZone { epsilon: 0.5 };
        assert_eq!(label(0.4, wide), SentimentLabel::Neutral);
        assert_eq!(label(-0.6, wide), SentimentLabel::Negative);
    }
}
