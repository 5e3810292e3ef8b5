use crate::lexicon::Lexicon;
use crate::statistics::compute_readability_with;
use crate::summarize::{Scorer, Sentence, SummaryMethod};
use crate::text::{contains_digit, normalized_words};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

pub const POSITION_SCORE: &str = "position_score";
pub const LENGTH_SCORE: &str = "length_score";
pub const HAS_NUMBERS: &str = "has_numbers";
pub const PROPER_NOUN_RATIO: &str = "proper_noun_ratio";
pub const LEXICAL_DIVERSITY: &str = "lexical_diversity";
pub const KEYWORD_SCORE: &str = "keyword_score";
pub const READABILITY_SCORE: &str = "readability_score";

/// Feature weights; they sum to 1.0 so the aggregate stays within [0, 1].
pub const FEATURE_WEIGHTS: [(&str, f64); 7] = [
    (POSITION_SCORE, 0.25),
    (LENGTH_SCORE, 0.15),
    (HAS_NUMBERS, 0.10),
    (PROPER_NOUN_RATIO, 0.10),
    (LEXICAL_DIVERSITY, 0.15),
    (KEYWORD_SCORE, 0.15),
    (READABILITY_SCORE, 0.10),
];

const FIRST_POSITION_WEIGHT: f64 = 1.0;
const LAST_POSITION_WEIGHT: f64 = 0.8;
const MIDDLE_POSITION_WEIGHT: f64 = 0.3;

// Keyword hits beyond this count add nothing.
const KEYWORD_SATURATION: f64 = 3.0;

/// Weighted combination of structural, lexical and readability features.
pub struct FeatureScorer {
    lexicon: Arc<Lexicon>,
}

impl FeatureScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn extract_features(&self, sentence: &str, index: usize, total: usize) -> BTreeMap<String, f64> {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        let proper_noun_ratio = if words.is_empty() {
            0.0
        } else {
            let capitalized = words
                .iter()
                .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
                .count();
            capitalized as f64 / words.len() as f64
        };

        let tokens = normalized_words(sentence);
        let lexical_diversity = if tokens.is_empty() {
            0.0
        } else {
            tokens.iter().collect::<HashSet<_>>().len() as f64 / tokens.len() as f64
        };

        let flesch = compute_readability_with(sentence, &self.lexicon).flesch_score;

        BTreeMap::from([
            (POSITION_SCORE.to_string(), position_score(index, total)),
            (LENGTH_SCORE.to_string(), length_score(words.len())),
            (HAS_NUMBERS.to_string(), if contains_digit(sentence) { 1.0 } else { 0.0 }),
            (PROPER_NOUN_RATIO.to_string(), proper_noun_ratio),
            (LEXICAL_DIVERSITY.to_string(), lexical_diversity),
            (KEYWORD_SCORE.to_string(), self.keyword_score(sentence)),
            (READABILITY_SCORE.to_string(), (flesch / 100.0).clamp(0.0, 1.0)),
        ])
    }

    /// Share of the saturation count of keywords found as substrings of the
    /// lower-cased sentence, so inflected forms ("результаты") still match.
    fn keyword_score(&self, sentence: &str) -> f64 {
        let lowered = sentence.to_lowercase();
        let found = self
            .lexicon
            .keywords()
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .count();
        (found as f64 / KEYWORD_SATURATION).min(1.0)
    }
}

/// 1.0 for the first sentence, 0.8 for the last, otherwise a falloff from
/// the nearer edge scaled by 0.3.
pub fn position_score(index: usize, total: usize) -> f64 {
    if index == 0 {
        return FIRST_POSITION_WEIGHT;
    }
    if index + 1 == total {
        return LAST_POSITION_WEIGHT;
    }
    let distance_to_edge = index.min(total.saturating_sub(index + 1)) as f64;
    MIDDLE_POSITION_WEIGHT * (1.0 - distance_to_edge / (total as f64 / 2.0))
}

/// Step function favouring sentences of 15 to 25 words.
pub fn length_score(word_count: usize) -> f64 {
    match word_count {
        15..=25 => 1.0,
        10..=14 | 26..=30 => 0.7,
        5..=9 | 31..=40 => 0.4,
        _ => 0.1,
    }
}

pub fn importance_score(features: &BTreeMap<String, f64>) -> f64 {
    FEATURE_WEIGHTS
        .iter()
        .map(|(name, weight)| features.get(*name).copied().unwrap_or(0.0) * weight)
        .sum()
}

impl Scorer for FeatureScorer {
    fn method(&self) -> SummaryMethod {
        SummaryMethod::FeatureBased
    }

    fn score(&self, sentences: &[String]) -> Vec<Sentence> {
        let total = sentences.len();
        sentences
            .iter()
            .enumerate()
            .map(|(position, text)| {
                let features = self.extract_features(text, position, total);
                let score = importance_score(&features);
                Sentence::new(text.clone(), position).scored(features, score)
            })
            .collect()
    }
}
