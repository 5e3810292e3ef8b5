//! Sentence segmentation, normalization and word tokenization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("hardcoded regex pattern is valid"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("hardcoded regex pattern is valid"));
static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("hardcoded regex pattern is valid"));

// Quotation and dash characters seen in Russian prose on top of ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &['«', '»', '—', '"'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub lowercase: bool,
    pub remove_punctuation: bool,
    pub remove_numbers: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_punctuation: true,
            remove_numbers: false,
        }
    }
}

/// Split text into trimmed, non-empty sentences on runs of `.`, `!` and `?`.
pub fn segment_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let flattened = text.replace('\n', " ");
    let sentences: Vec<String> = SENTENCE_TERMINATORS
        .split(flattened.trim())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!(count = sentences.len(), "text segmented into sentences");
    sentences
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

pub fn normalize(text: &str, options: NormalizeOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut processed = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    if options.remove_punctuation {
        processed.retain(|c| !is_punctuation(c));
    }
    if options.remove_numbers {
        processed = DIGIT_RUN.replace_all(&processed, "").into_owned();
    }
    processed.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Lower-cased, punctuation-free tokens with numbers kept.
pub fn normalized_words(text: &str) -> Vec<String> {
    tokenize_words(&normalize(text, NormalizeOptions::default()))
}

pub fn contains_digit(text: &str) -> bool {
    ANY_DIGIT.is_match(text)
}

/// Relative frequency of each word (`count / total`).
pub fn word_frequencies(words: &[String]) -> HashMap<String, f64> {
    if words.is_empty() {
        return HashMap::new();
    }
    let total = words.len() as f64;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / total))
        .collect()
}

/// Capitalized tokens longer than one character, deduplicated in order of
/// first appearance. A crude stand-in for named-entity recognition.
pub fn extract_named_entities(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|w| w.chars().count() > 1 && w.chars().next().is_some_and(char::is_uppercase))
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_on_terminator_runs() {
        let sentences = segment_sentences("Первое! Второе?! Третье... Четвёртое.");
        assert_eq!(sentences, vec!["Первое", "Второе", "Третье", "Четвёртое"]);
    }

    #[test]
    fn segments_across_newlines() {
        let sentences = segment_sentences("Это тестовый текст.\nОн состоит из нескольких\nстрок.");
        assert_eq!(
            sentences,
            vec!["Это тестовый текст", "Он состоит из нескольких строк"]
        );
    }

    #[test]
    fn segments_without_trailing_terminator() {
        assert_eq!(segment_sentences("Без точки"), vec!["Без точки"]);
    }

    #[test]
    fn segmenting_empty_or_punctuation_only_text_yields_nothing() {
        assert!(segment_sentences("").is_empty());
        assert!(segment_sentences("   \n  ").is_empty());
        assert!(segment_sentences("...!?").is_empty());
    }

    #[test]
    fn normalize_strips_punctuation_and_guillemets() {
        let out = normalize(
            "«Привет», — сказал он: \"Мир!\"",
            NormalizeOptions::default(),
        );
        assert_eq!(out, "привет сказал он мир");
    }

    #[test]
    fn normalize_respects_options() {
        let keep_case = NormalizeOptions {
            lowercase: false,
            remove_punctuation: false,
            remove_numbers: true,
        };
        assert_eq!(normalize("В 2023  году, 15 раз.", keep_case), "В году, раз.");
        assert_eq!(
            normalize("  Рост на 25%  ", NormalizeOptions::default()),
            "рост на 25"
        );
        assert_eq!(normalize("", NormalizeOptions::default()), "");
    }

    #[test]
    fn tokenize_drops_empty_tokens() {
        assert_eq!(tokenize_words("  a  b\tc \n"), vec!["a", "b", "c"]);
        assert!(tokenize_words("").is_empty());
    }

    #[test]
    fn normalized_words_keep_numbers() {
        assert_eq!(
            normalized_words("В 2023 году было 15 исследований."),
            vec!["в", "2023", "году", "было", "15", "исследований"]
        );
    }

    #[test]
    fn detects_digits() {
        assert!(contains_digit("рост на 25%"));
        assert!(!contains_digit("без цифр"));
    }

    #[test]
    fn word_frequencies_are_relative() {
        let words: Vec<String> = ["a", "b", "a", "c"].iter().map(|s| s.to_string()).collect();
        let freq = word_frequencies(&words);
        assert!((freq["a"] - 0.5).abs() < 1e-9);
        assert!((freq["c"] - 0.25).abs() < 1e-9);
        assert!(word_frequencies(&[]).is_empty());
    }

    #[test]
    fn named_entities_are_capitalized_multi_char_tokens() {
        let entities = extract_named_entities("Москва и Петербург, а также Москва и Я");
        assert_eq!(entities, vec!["Москва", "Петербург,"]);
    }
}
