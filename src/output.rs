//! File persistence for inputs and summary results.

use crate::errors::OutputError;
use crate::statistics::{ReadabilityMetrics, TextStats};
use crate::summarize::SummaryMethod;
use crate::summarizer::SummaryResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const SUMMARY_FILE: &str = "summary.txt";
pub const STATISTICS_FILE: &str = "statistics.json";
pub const SENTENCES_FILE: &str = "sentences_info.json";

/// `TextStats` flattened together with the method that produced the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub original_sentences_count: usize,
    pub original_words_count: usize,
    pub summary_sentences_count: usize,
    pub summary_words_count: usize,
    pub compression_ratio: f64,
    pub reading_time_minutes: f64,
    pub original_readability: ReadabilityMetrics,
    pub summary_readability: ReadabilityMetrics,
    pub method_used: SummaryMethod,
}

impl StatisticsReport {
    pub fn new(stats: &TextStats, method_used: SummaryMethod) -> Self {
        Self {
            original_sentences_count: stats.original_sentences_count,
            original_words_count: stats.original_words_count,
            summary_sentences_count: stats.summary_sentences_count,
            summary_words_count: stats.summary_words_count,
            compression_ratio: stats.compression_ratio,
            reading_time_minutes: stats.reading_time_minutes,
            original_readability: stats.original_readability,
            summary_readability: stats.summary_readability,
            method_used,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceInfo {
    pub text: String,
    pub position: usize,
    pub importance_score: f64,
    pub features: BTreeMap<String, f64>,
}

fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))
        }
        _ => Ok(()),
    }
}

pub fn read_text_file(path: &Path) -> Result<String, OutputError> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "file not found");
        return Err(OutputError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read file");
        OutputError::io(path, e)
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "file read");
    Ok(content)
}

pub fn write_text_file(path: &Path, content: &str) -> Result<(), OutputError> {
    ensure_parent(path)?;
    fs::write(path, content).map_err(|e| OutputError::io(path, e))?;
    tracing::info!(path = %path.display(), "text written");
    Ok(())
}

/// Pretty-printed JSON; non-ASCII text is written verbatim.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    ensure_parent(path)?;
    let body = serde_json::to_string_pretty(value).map_err(|e| OutputError::json(path, e))?;
    fs::write(path, body).map_err(|e| OutputError::io(path, e))?;
    tracing::info!(path = %path.display(), "json saved");
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, OutputError> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "json file not found");
        return Err(OutputError::NotFound(path.to_path_buf()));
    }
    let body = fs::read_to_string(path).map_err(|e| OutputError::io(path, e))?;
    let value = serde_json::from_str(&body).map_err(|e| OutputError::json(path, e))?;
    tracing::info!(path = %path.display(), "json loaded");
    Ok(value)
}

/// Write `summary.txt`, `statistics.json` and `sentences_info.json` into `dir`.
pub fn save_result(result: &SummaryResult, dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))?;

    write_text_file(&dir.join(SUMMARY_FILE), &result.summary_text)?;
    save_json(
        &dir.join(STATISTICS_FILE),
        &StatisticsReport::new(&result.statistics, result.method_used),
    )?;

    let sentences: Vec<SentenceInfo> = result
        .important_sentences
        .iter()
        .map(|s| SentenceInfo {
            text: s.text.clone(),
            position: s.position,
            importance_score: s.importance_score,
            features: s.features.clone(),
        })
        .collect();
    save_json(&dir.join(SENTENCES_FILE), &sentences)
}
