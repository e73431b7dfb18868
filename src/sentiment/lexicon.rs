use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Word polarities tuned for short comments and course feedback.
    pub static ref WORDS: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            // favourable
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("beautiful", 0.85),
            ("best", 1.0),
            ("brilliant", 0.9),
            ("clear", 0.1),
            ("cool", 0.35),
            ("easy", 0.43),
            ("engaging", 0.4),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("excellent", 1.0),
            ("fantastic", 0.4),
            ("fun", 0.3),
            ("glad", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("happy", 0.8),
            ("helpful", 0.5),
            ("incredible", 0.9),
            ("interesting", 0.5),
            ("like", 0.2),
            ("liked", 0.2),
            ("love", 0.5),
            ("loved", 0.7),
            ("nice", 0.6),
            ("perfect", 1.0),
            ("practical", 0.2),
            ("recommend", 0.3),
            ("thanks", 0.2),
            ("useful", 0.3),
            ("well", 0.1),
            ("wonderful", 1.0),
            // unfavourable
            ("annoying", -0.8),
            ("awful", -1.0),
            ("bad", -0.7),
            ("boring", -1.0),
            ("broken", -0.4),
            ("confusing", -0.3),
            ("difficult", -0.5),
            ("disappointed", -0.75),
            ("disappointing", -0.6),
            ("dull", -0.3),
            ("fail", -0.5),
            ("hard", -0.29),
            ("hate", -0.8),
            ("horrible", -1.0),
            ("messy", -0.3),
            ("poor", -0.4),
            ("sad", -0.5),
            ("slow", -0.3),
            ("stupid", -0.8),
            ("terrible", -1.0),
            ("ugly", -0.7),
            ("useless", -0.5),
            ("waste", -0.2),
            ("worse", -0.4),
            ("worst", -1.0),
            ("wrong", -0.5),
        ];
        entries.iter().copied().collect()
    };

    /// Multipliers applied to the next scored word.
    pub static ref INTENSIFIERS: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            ("absolutely", 1.5),
            ("extremely", 1.5),
            ("highly", 1.3),
            ("incredibly", 1.5),
            ("quite", 1.1),
            ("really", 1.3),
            ("so", 1.2),
            ("too", 1.2),
            ("very", 1.3),
            ("barely", 0.5),
            ("slightly", 0.5),
            ("somewhat", 0.7),
        ];
        entries.iter().copied().collect()
    };

    /// Words that flip (and soften) the next scored word.
    pub static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "neither", "nor", "cannot", "can't", "cant",
        "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt",
        "wasn't", "wasnt", "aren't", "arent", "weren't", "werent", "won't", "wont",
        "wouldn't", "wouldnt", "hardly",
    ]
    .into_iter()
    .collect();
}

pub fn polarity(word: &str) -> Option<f64> {
    WORDS.get(word).copied()
}

pub fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word)
}
