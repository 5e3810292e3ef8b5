//! Extractive summarization with two interchangeable sentence scorers
//! (TF-ISF and weighted features) and Flesch-style readability statistics.
//!
//! ```no_run
//! use textsum::{SummaryMethod, TextSummarizer};
//!
//! let summarizer = TextSummarizer::new(SummaryMethod::FrequencyBased);
//! let result = summarizer.summarize("Первое предложение. Второе предложение.", 0.5)?;
//! println!("{}", result.summary_text);
//! # Ok::<(), textsum::SummarizeError>(())
//! ```

pub mod errors;
pub mod lexicon;
pub mod logging;
pub mod output;
pub mod statistics;
pub mod summarize;
pub mod summarizer;
pub mod text;
pub mod visualize;

pub use errors::{OutputError, SummarizeError, VisualizeError};
pub use lexicon::Lexicon;
pub use statistics::{compute_comparative_stats, compute_readability, ReadabilityMetrics, TextStats};
pub use summarize::{build_scorer, FeatureScorer, FrequencyScorer, Scorer, Sentence, SummaryMethod};
pub use summarizer::{SummarizerConfig, SummaryResult, TextSummarizer};
