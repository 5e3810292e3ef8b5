use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A sentence of the input together with its scorer-specific features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub position: usize,
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
    #[serde(default)]
    pub importance_score: f64,
    #[serde(default)]
    pub is_important: bool,
}

impl Sentence {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
            features: BTreeMap::new(),
            importance_score: 0.0,
            is_important: false,
        }
    }

    pub fn scored(mut self, features: BTreeMap<String, f64>, importance_score: f64) -> Self {
        self.features = features;
        self.importance_score = importance_score;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryMethod {
    #[serde(rename = "frequency")]
    FrequencyBased,
    #[default]
    #[serde(rename = "feature_based")]
    FeatureBased,
}

impl SummaryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::FrequencyBased => "frequency",
            SummaryMethod::FeatureBased => "feature_based",
        }
    }
}

impl fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(SummaryMethod::FrequencyBased),
            "feature" | "feature_based" => Ok(SummaryMethod::FeatureBased),
            other => Err(format!("unknown summary method: {other}")),
        }
    }
}

/// A sentence-scoring strategy.
pub trait Scorer: Send + Sync {
    fn method(&self) -> SummaryMethod;

    /// One scored [`Sentence`] per input, in input order.
    fn score(&self, sentences: &[String]) -> Vec<Sentence>;

    /// Score and select the top sentences for `compression_ratio`.
    fn summarize(&self, sentences: &[String], compression_ratio: f64) -> Vec<Sentence> {
        selection::select_sentences(self.score(sentences), compression_ratio)
    }
}

pub mod feature;
pub mod frequency;
pub mod selection;

pub use feature::FeatureScorer;
pub use frequency::FrequencyScorer;

pub fn build_scorer(
    method: SummaryMethod,
    lexicon: Arc<Lexicon>,
    use_stopwords: bool,
) -> Arc<dyn Scorer> {
    match method {
        SummaryMethod::FrequencyBased => Arc::new(FrequencyScorer::new(lexicon, use_stopwords)),
        SummaryMethod::FeatureBased => Arc::new(FeatureScorer::new(lexicon)),
    }
}
