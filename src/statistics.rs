//! Readability metrics and original-versus-summary statistics.
//!
//! The readability index is the Flesch reading-ease formula with syllables
//! approximated by vowel counts, so it works for both Cyrillic and Latin text.
//! The raw value is reported unclamped.

use crate::lexicon::Lexicon;
use crate::text::{normalized_words, segment_sentences};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Words per minute used for the reading-time estimate.
pub const READING_SPEED_WPM: f64 = 200.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    pub flesch_score: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub lexical_diversity: f64,
    pub total_sentences: usize,
    pub total_words: usize,
    pub unique_words: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub original_sentences_count: usize,
    pub original_words_count: usize,
    pub summary_sentences_count: usize,
    pub summary_words_count: usize,
    pub compression_ratio: f64,
    pub reading_time_minutes: f64,
    pub original_readability: ReadabilityMetrics,
    pub summary_readability: ReadabilityMetrics,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn flesch(total_sentences: usize, total_words: usize, total_syllables: usize) -> f64 {
    let words = total_words as f64;
    206.835 - 1.3 * (words / total_sentences as f64) - 60.1 * (total_syllables as f64 / words)
}

pub fn compute_readability(text: &str) -> ReadabilityMetrics {
    compute_readability_with(text, &Lexicon::shared())
}

/// Readability metrics of `text`; all zeros when it has no sentences or no words.
pub fn compute_readability_with(text: &str, lexicon: &Lexicon) -> ReadabilityMetrics {
    let sentences = segment_sentences(text);
    let words = normalized_words(text);
    if sentences.is_empty() || words.is_empty() {
        return ReadabilityMetrics::default();
    }

    let total_sentences = sentences.len();
    let total_words = words.len();
    let total_syllables: usize = words.iter().map(|w| lexicon.count_syllables(w)).sum();
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let unique_words = words.iter().collect::<HashSet<_>>().len();

    let metrics = ReadabilityMetrics {
        flesch_score: round_to(flesch(total_sentences, total_words, total_syllables), 2),
        avg_sentence_length: round_to(total_words as f64 / total_sentences as f64, 2),
        avg_word_length: round_to(total_chars as f64 / total_words as f64, 2),
        lexical_diversity: round_to(unique_words as f64 / total_words as f64, 3),
        total_sentences,
        total_words,
        unique_words,
    };
    tracing::debug!(?metrics, "readability metrics computed");
    metrics
}

pub fn compute_comparative_stats(original: &str, summary: &str) -> TextStats {
    compute_comparative_stats_with(original, summary, &Lexicon::shared())
}

pub fn compute_comparative_stats_with(original: &str, summary: &str, lexicon: &Lexicon) -> TextStats {
    let original_words_count = normalized_words(original).len();
    let summary_words_count = normalized_words(summary).len();

    let compression_ratio = if original_words_count > 0 {
        1.0 - summary_words_count as f64 / original_words_count as f64
    } else {
        0.0
    };

    TextStats {
        original_sentences_count: segment_sentences(original).len(),
        original_words_count,
        summary_sentences_count: segment_sentences(summary).len(),
        summary_words_count,
        compression_ratio,
        reading_time_minutes: original_words_count as f64 / READING_SPEED_WPM,
        original_readability: compute_readability_with(original, lexicon),
        summary_readability: compute_readability_with(summary, lexicon),
    }
}
