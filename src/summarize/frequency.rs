use crate::lexicon::Lexicon;
use crate::summarize::{Scorer, Sentence, SummaryMethod};
use crate::text::normalized_words;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

pub const TF_ISF_FEATURE: &str = "tf_isf_score";

/// Term frequency times inverse sentence frequency.
///
/// The weight `ln(N / (1 + df))` turns negative for words present in (almost)
/// every sentence, which pushes such sentences down rather than to zero.
pub struct FrequencyScorer {
    lexicon: Arc<Lexicon>,
    use_stopwords: bool,
}

impl FrequencyScorer {
    pub fn new(lexicon: Arc<Lexicon>, use_stopwords: bool) -> Self {
        Self {
            lexicon,
            use_stopwords,
        }
    }

    pub fn use_stopwords(&self) -> bool {
        self.use_stopwords
    }

    fn content_words(&self, sentence: &str) -> Vec<String> {
        let mut words = normalized_words(sentence);
        if self.use_stopwords {
            words.retain(|w| !self.lexicon.is_stopword(w));
        }
        words
    }

    pub fn tf_isf_scores(&self, sentences: &[String]) -> Vec<f64> {
        let sentence_words: Vec<Vec<String>> =
            sentences.iter().map(|s| self.content_words(s)).collect();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for words in &sentence_words {
            let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
            for word in unique {
                *document_frequency.entry(word).or_insert(0) += 1;
            }
        }

        let num_sentences = sentences.len() as f64;
        sentence_words
            .iter()
            .map(|words| {
                if words.is_empty() {
                    return 0.0;
                }
                // ordered so the float sum does not depend on hash order
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                for word in words {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
                let total = words.len() as f64;
                counts
                    .iter()
                    .map(|(word, count)| {
                        let df = document_frequency.get(word).copied().unwrap_or(0) as f64;
                        (*count as f64 / total) * (num_sentences / (1.0 + df)).ln()
                    })
                    .sum::<f64>()
            })
            .collect()
    }
}

impl Scorer for FrequencyScorer {
    fn method(&self) -> SummaryMethod {
        SummaryMethod::FrequencyBased
    }

    fn score(&self, sentences: &[String]) -> Vec<Sentence> {
        self.tf_isf_scores(sentences)
            .into_iter()
            .zip(sentences)
            .enumerate()
            .map(|(position, (score, text))| {
                let features = BTreeMap::from([(TF_ISF_FEATURE.to_string(), score)]);
                Sentence::new(text.clone(), position).scored(features, score)
            })
            .collect()
    }
}
