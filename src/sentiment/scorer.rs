use crate::models::PolarityScore;
use crate::sentiment::lexicon;

/// Anything that can turn text into a polarity.
///
/// Implementations must be total: every UTF-8 string, including the empty
/// one, yields a score in [-1.0, 1.0] and the empty string yields 0.0.
pub trait TextPolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> PolarityScore;
}

/// Rule-based scorer backed by the built-in word lexicon.
///
/// The score is the mean of every lexicon hit in the text. A preceding
/// intensifier scales a hit, a preceding negation multiplies it by -0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

const NEGATION_FACTOR: f64 = -0.5;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl TextPolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> PolarityScore {
        let lowered = text.to_lowercase();
        let mut hits: Vec<f64> = Vec::new();
        let mut negated = false;
        let mut multiplier: Option<f64> = None;

        for token in tokenize(&lowered) {
            if lexicon::is_negation(token) {
                negated = true;
                continue;
            }
            if let Some(factor) = lexicon::intensity(token) {
                multiplier = Some(multiplier.unwrap_or(1.0) * factor);
                continue;
            }
            if let Some(polarity) = lexicon::polarity(token) {
                let mut value = polarity * multiplier.unwrap_or(1.0);
                if negated {
                    value *= NEGATION_FACTOR;
                }
                hits.push(value);
            }
            negated = false;
            multiplier = None;
        }

        if hits.is_empty() {
            return PolarityScore::NEUTRAL;
        }
        PolarityScore::new(hits.iter().sum::<f64>() / hits.len() as f64)
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
}
