use crate::errors::SummarizeError;
use crate::lexicon::Lexicon;
use crate::statistics::{compute_comparative_stats_with, TextStats};
use crate::summarize::selection::assemble;
use crate::summarize::{build_scorer, Scorer, Sentence, SummaryMethod};
use crate::text::segment_sentences;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub original_text: String,
    pub summary_text: String,
    pub important_sentences: Vec<Sentence>,
    pub statistics: TextStats,
    pub method_used: SummaryMethod,
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub method: SummaryMethod,
    /// Only consulted by the frequency-based scorer.
    pub use_stopwords: bool,
    pub lexicon: Arc<Lexicon>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            method: SummaryMethod::default(),
            use_stopwords: true,
            lexicon: Lexicon::shared(),
        }
    }
}

pub struct TextSummarizer {
    method: SummaryMethod,
    scorer: Arc<dyn Scorer>,
    lexicon: Arc<Lexicon>,
}

impl Default for TextSummarizer {
    fn default() -> Self {
        Self::with_config(SummarizerConfig::default())
    }
}

impl TextSummarizer {
    pub fn new(method: SummaryMethod) -> Self {
        Self::with_config(SummarizerConfig {
            method,
            ..SummarizerConfig::default()
        })
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        let scorer = build_scorer(config.method, Arc::clone(&config.lexicon), config.use_stopwords);
        Self {
            method: config.method,
            scorer,
            lexicon: config.lexicon,
        }
    }

    pub fn method(&self) -> SummaryMethod {
        self.method
    }

    /// Summarize `text`, keeping roughly `compression_ratio` of its sentences.
    ///
    /// Fails only when `compression_ratio` is outside `(0, 1]`. Text without
    /// sentences yields an empty summary and zeroed statistics.
    pub fn summarize(&self, text: &str, compression_ratio: f64) -> Result<SummaryResult, SummarizeError> {
        if !(compression_ratio > 0.0 && compression_ratio <= 1.0) {
            return Err(SummarizeError::InvalidArgument(format!(
                "compression_ratio must be in (0, 1], got {compression_ratio}"
            )));
        }

        let sentences = segment_sentences(text);
        if sentences.is_empty() {
            tracing::info!(method = %self.method, "no sentences found, returning empty summary");
            return Ok(self.bundle(text, String::new(), Vec::new()));
        }

        let important_sentences = self.scorer.summarize(&sentences, compression_ratio);
        let summary_text = assemble(&important_sentences);
        tracing::info!(
            method = %self.method,
            compression_ratio,
            original_sentences = sentences.len(),
            selected_sentences = important_sentences.len(),
            "summary assembled"
        );
        Ok(self.bundle(text, summary_text, important_sentences))
    }

    fn bundle(&self, text: &str, summary_text: String, important_sentences: Vec<Sentence>) -> SummaryResult {
        let statistics = compute_comparative_stats_with(text, &summary_text, &self.lexicon);
        SummaryResult {
            original_text: text.to_string(),
            summary_text,
            important_sentences,
            statistics,
            method_used: self.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "Это первое предложение. Это второе предложение. А это третье.";

    #[test]
    fn default_method_is_feature_based() {
        assert_eq!(TextSummarizer::default().method(), SummaryMethod::FeatureBased);
        assert_eq!(
            TextSummarizer::new(SummaryMethod::FrequencyBased).method(),
            SummaryMethod::FrequencyBased
        );
    }

    #[test]
    fn rejects_ratio_outside_unit_interval() {
        let summarizer = TextSummarizer::default();
        for ratio in [0.0, -0.1, 1.5, f64::NAN] {
            let err = summarizer.summarize("Текст.", ratio).unwrap_err();
            assert!(matches!(err, SummarizeError::InvalidArgument(_)), "{ratio}");
        }
        assert!(summarizer.summarize("Текст.", 1.0).is_ok());
    }

    #[test]
    fn empty_text_short_circuits() {
        let result = TextSummarizer::default().summarize("", 0.3).unwrap();
        assert_eq!(result.summary_text, "");
        assert!(result.important_sentences.is_empty());
        assert_eq!(result.statistics, TextStats::default());
        assert_eq!(result.method_used, SummaryMethod::FeatureBased);
    }

    #[test]
    fn feature_based_short_text_selects_one_sentence() {
        let result = TextSummarizer::new(SummaryMethod::FeatureBased)
            .summarize(SHORT, 0.5)
            .unwrap();
        assert_eq!(result.important_sentences.len(), 1);
        assert_eq!(result.summary_text, result.important_sentences[0].text);
        // the last sentence wins on readability
        assert_eq!(result.summary_text, "А это третье");
        assert_eq!(result.statistics.original_sentences_count, 3);
        assert_eq!(result.statistics.original_words_count, 9);
        assert!((result.statistics.compression_ratio - (1.0 - 3.0 / 9.0)).abs() < 1e-9);
    }

    #[test]
    fn one_sentence_text_is_its_own_summary() {
        for method in [SummaryMethod::FrequencyBased, SummaryMethod::FeatureBased] {
            for ratio in [0.01, 0.5, 1.0] {
                let result = TextSummarizer::new(method)
                    .summarize("  Одно предложение.  ", ratio)
                    .unwrap();
                assert_eq!(result.summary_text, "Одно предложение");
                assert_eq!(result.important_sentences.len(), 1);
                assert_eq!(result.statistics.compression_ratio, 0.0);
            }
        }
    }

    #[test]
    fn stopword_toggle_reaches_frequency_scorer() {
        let text = "И в на. Кошка спит. Собака ест.";
        let with = TextSummarizer::new(SummaryMethod::FrequencyBased)
            .summarize(text, 1.0)
            .unwrap();
        let without = TextSummarizer::with_config(SummarizerConfig {
            method: SummaryMethod::FrequencyBased,
            use_stopwords: false,
            ..SummarizerConfig::default()
        })
        .summarize(text, 1.0)
        .unwrap();
        assert_eq!(with.important_sentences[0].importance_score, 0.0);
        assert!(without.important_sentences[0].importance_score > 0.0);
    }
}
