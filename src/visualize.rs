//! PNG charts for a summarization run, drawn with `plotters` on the bitmap
//! backend: selected sentence scores, original-versus-summary counts and a
//! radar of the original's readability metrics.

use crate::errors::VisualizeError;
use crate::statistics::ReadabilityMetrics;
use crate::summarize::Sentence;
use crate::summarizer::SummaryResult;
use plotters::prelude::*;
use std::error::Error;
use std::f64::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};

pub const VISUALIZATIONS_DIR: &str = "visualizations";
pub const SENTENCE_SCORES_FILE: &str = "sentence_scores.png";
pub const SUMMARY_COMPARISON_FILE: &str = "summary_comparison.png";
pub const READABILITY_METRICS_FILE: &str = "readability_metrics.png";

const TOP_HIGHLIGHTED: usize = 10;
const HISTOGRAM_BINS: usize = 20;
const COMPARISON_LABELS: [&str; 3] = ["Sentences", "Words", "Unique words"];
const RADAR_LABELS: [&str; 4] = [
    "Flesch index",
    "Sentence length",
    "Word length",
    "Lexical diversity",
];
const RADAR_RINGS: usize = 4;

type DrawResult = Result<(), Box<dyn Error>>;

/// Writes all three charts into `dir`, returning the files written.
///
/// Nothing is drawn when the result selected no sentences.
pub fn plot_all(result: &SummaryResult, dir: &Path) -> Result<Vec<PathBuf>, VisualizeError> {
    if result.important_sentences.is_empty() {
        tracing::warn!("summary has no sentences, skipping charts");
        return Ok(Vec::new());
    }
    fs::create_dir_all(dir).map_err(|source| VisualizeError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let stats = &result.statistics;
    let scores_path = dir.join(SENTENCE_SCORES_FILE);
    let comparison_path = dir.join(SUMMARY_COMPARISON_FILE);
    let readability_path = dir.join(READABILITY_METRICS_FILE);
    let charts = [
        (
            plot_sentence_scores(&result.important_sentences, &scores_path)?,
            scores_path,
        ),
        (
            plot_summary_comparison(
                &stats.original_readability,
                &stats.summary_readability,
                &comparison_path,
            )?,
            comparison_path,
        ),
        (
            plot_readability_metrics(&stats.original_readability, &readability_path)?,
            readability_path,
        ),
    ];
    Ok(charts
        .into_iter()
        .filter_map(|(written, path)| written.then_some(path))
        .collect())
}

/// Bar chart of importance scores with the top ten highlighted, above a
/// histogram of the same scores. Returns `false` when there is nothing to plot.
pub fn plot_sentence_scores(sentences: &[Sentence], path: &Path) -> Result<bool, VisualizeError> {
    if sentences.is_empty() {
        tracing::warn!("no sentence scores to plot");
        return Ok(false);
    }
    let scores: Vec<f64> = sentences.iter().map(|s| s.importance_score).collect();
    draw_sentence_scores(&scores, path).map_err(|e| VisualizeError::render(path, e))?;
    tracing::info!(path = %path.display(), "sentence score chart saved");
    Ok(true)
}

/// Grouped bars of sentence, word and unique-word counts.
pub fn plot_summary_comparison(
    original: &ReadabilityMetrics,
    summary: &ReadabilityMetrics,
    path: &Path,
) -> Result<bool, VisualizeError> {
    if original.total_words == 0 {
        tracing::warn!("original text has no words, skipping comparison chart");
        return Ok(false);
    }
    let pairs = [
        (original.total_sentences, summary.total_sentences),
        (original.total_words, summary.total_words),
        (original.unique_words, summary.unique_words),
    ];
    draw_summary_comparison(&pairs, path).map_err(|e| VisualizeError::render(path, e))?;
    tracing::info!(path = %path.display(), "comparison chart saved");
    Ok(true)
}

/// Radar of Flesch index, average sentence length, average word length and
/// lexical diversity, each scaled against the largest of the four.
pub fn plot_readability_metrics(metrics: &ReadabilityMetrics, path: &Path) -> Result<bool, VisualizeError> {
    if metrics.total_words == 0 {
        tracing::warn!("no readability metrics to plot");
        return Ok(false);
    }
    let values = [
        metrics.flesch_score,
        metrics.avg_sentence_length,
        metrics.avg_word_length,
        metrics.lexical_diversity,
    ];
    draw_readability_radar(&values, path).map_err(|e| VisualizeError::render(path, e))?;
    tracing::info!(path = %path.display(), "readability chart saved");
    Ok(true)
}

/// Indices of the `n` highest scores; empty unless `n` is below the count.
fn top_indices(scores: &[f64], n: usize) -> Vec<usize> {
    if n == 0 || n >= scores.len() {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(n);
    order
}

/// Y range covering every value and zero, never empty.
fn value_range(values: &[f64]) -> (f64, f64) {
    let low = values.iter().copied().fold(0.0, f64::min);
    let high = values.iter().copied().fold(0.0, f64::max);
    if high - low < f64::EPSILON {
        return (low, low + 1.0);
    }
    let pad = (high - low) * 0.05;
    (if low < 0.0 { low - pad } else { low }, high + pad)
}

fn histogram(scores: &[f64], bins: usize) -> (f64, f64, Vec<usize>) {
    let mut low = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if high - low < f64::EPSILON {
        low -= 0.5;
        high += 0.5;
    }
    let width = (high - low) / bins as f64;
    let mut counts = vec![0; bins];
    for &score in scores {
        let bin = ((score - low) / width).floor() as usize;
        counts[bin.min(bins - 1)] += 1;
    }
    (low, high, counts)
}

/// Rectangle corners for a bar from zero to `value`, upper-left first.
fn bar(x0: f64, x1: f64, value: f64) -> [(f64, f64); 2] {
    [(x0, value.max(0.0)), (x1, value.min(0.0))]
}

fn draw_sentence_scores(scores: &[f64], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (1200, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(500);

    let highlighted = top_indices(scores, TOP_HIGHLIGHTED);
    let (low, high) = value_range(scores);
    let count = scores.len() as f64;
    let mut bars = ChartBuilder::on(&upper)
        .caption("Sentence importance scores", ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..count - 0.5, low..high)?;
    bars.configure_mesh()
        .x_desc("Sentence")
        .y_desc("Importance score")
        .draw()?;
    bars.draw_series(scores.iter().enumerate().map(|(i, &score)| {
        let color = if highlighted.contains(&i) {
            RED.mix(0.8)
        } else {
            BLUE.mix(0.7)
        };
        let x = i as f64;
        Rectangle::new(bar(x - 0.4, x + 0.4, score), color.filled())
    }))?;

    let (min_score, max_score, counts) = histogram(scores, HISTOGRAM_BINS);
    let tallest = counts.iter().copied().max().unwrap_or(0) as f64;
    let width = (max_score - min_score) / HISTOGRAM_BINS as f64;
    let mut hist = ChartBuilder::on(&lower)
        .caption("Score distribution", ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_score..max_score, 0.0..tallest + 1.0)?;
    hist.configure_mesh()
        .x_desc("Importance score")
        .y_desc("Sentences")
        .draw()?;
    hist.draw_series(counts.iter().enumerate().map(|(i, &n)| {
        let x0 = min_score + width * i as f64;
        Rectangle::new(bar(x0, x0 + width, n as f64), BLUE.mix(0.7).filled())
    }))?;
    hist.draw_series(counts.iter().enumerate().filter(|&(_, &n)| n > 0).map(|(i, &n)| {
        let x0 = min_score + width * i as f64;
        Rectangle::new(bar(x0, x0 + width, n as f64), BLACK.stroke_width(1))
    }))?;

    root.present()?;
    Ok(())
}

fn draw_summary_comparison(pairs: &[(usize, usize); 3], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let tallest = pairs
        .iter()
        .map(|&(original, summary)| original.max(summary))
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption("Original text versus summary", ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..2.5, 0.0..tallest * 1.15)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(COMPARISON_LABELS.len())
        .x_label_formatter(&|x: &f64| {
            let i = x.round();
            if (x - i).abs() < 1e-6 && i >= 0.0 {
                COMPARISON_LABELS.get(i as usize).copied().unwrap_or_default().to_string()
            } else {
                String::new()
            }
        })
        .x_desc("Metric")
        .y_desc("Count")
        .draw()?;

    let original_color = BLUE.mix(0.8);
    let summary_color = GREEN.mix(0.8);
    chart
        .draw_series(pairs.iter().enumerate().map(|(i, &(original, _))| {
            let x = i as f64;
            Rectangle::new(bar(x - 0.35, x, original as f64), original_color.filled())
        }))?
        .label("Original")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], original_color.filled()));
    chart
        .draw_series(pairs.iter().enumerate().map(|(i, &(_, summary))| {
            let x = i as f64;
            Rectangle::new(bar(x, x + 0.35, summary as f64), summary_color.filled())
        }))?
        .label("Summary")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], summary_color.filled()));

    chart.draw_series(pairs.iter().enumerate().flat_map(|(i, &(original, summary))| {
        let x = i as f64;
        [(x - 0.3, original), (x + 0.05, summary)].map(|(at, value)| {
            Text::new(
                value.to_string(),
                (at, value as f64 + tallest * 0.02),
                ("sans-serif", 14).into_font(),
            )
        })
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn radar_point(value: f64, index: usize, axes: usize) -> (f64, f64) {
    let angle = TAU * index as f64 / axes as f64;
    (value * angle.cos(), value * angle.sin())
}

fn draw_readability_radar(values: &[f64; 4], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Readability metrics", ("sans-serif", 24).into_font())
        .margin(30)
        .build_cartesian_2d(-1.3..1.3, -1.3..1.3)?;

    let axes = values.len();
    for ring in 1..=RADAR_RINGS {
        let radius = ring as f64 / RADAR_RINGS as f64;
        let outline: Vec<(f64, f64)> = (0..=72).map(|step| radar_point(radius, step, 72)).collect();
        chart.draw_series([PathElement::new(outline, BLACK.mix(0.2))])?;
    }
    chart.draw_series(
        (0..axes).map(|i| PathElement::new(vec![(0.0, 0.0), radar_point(1.0, i, axes)], BLACK.mix(0.3))),
    )?;

    // negative values (a very hard Flesch score) sit at the centre
    let largest = values.iter().copied().fold(0.0, f64::max);
    let radii: Vec<f64> = values
        .iter()
        .map(|&v| if largest > 0.0 { v.max(0.0) / largest } else { 0.0 })
        .collect();
    let mut polygon: Vec<(f64, f64)> = radii
        .iter()
        .enumerate()
        .map(|(i, &r)| radar_point(r, i, axes))
        .collect();

    chart.draw_series([Polygon::new(polygon.clone(), BLUE.mix(0.25))])?;
    polygon.push(polygon[0]);
    chart.draw_series([PathElement::new(polygon.clone(), BLUE.stroke_width(2))])?;
    chart.draw_series(
        polygon[..axes]
            .iter()
            .map(|&point| Circle::new(point, 4, BLUE.filled())),
    )?;
    chart.draw_series(RADAR_LABELS.iter().enumerate().map(|(i, label)| {
        Text::new(
            label.to_string(),
            radar_point(1.12, i, axes),
            ("sans-serif", 16).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}
