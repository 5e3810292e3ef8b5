use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod config;

use crate::config::{AnalyzeArgs, AppConfig, Command, SummarizeArgs};
use textsum::lexicon::parse_word_list;
use textsum::output::{read_text_file, save_json, save_result, write_text_file, StatisticsReport};
use textsum::statistics::compute_readability;
use textsum::text::{extract_named_entities, normalized_words, segment_sentences, word_frequencies};
use textsum::visualize::{plot_all, VISUALIZATIONS_DIR};
use textsum::{logging, Lexicon, SummarizerConfig, TextSummarizer};

const RULE: &str = "==================================================";
const TOP_WORDS: usize = 10;
const SAMPLE_SENTENCES: usize = 3;
const SAMPLE_CHARS: usize = 80;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    let outcome = match cfg.command {
        Command::Summarize(args) => run_summarize(&args),
        Command::Analyze(args) => run_analyze(&args),
        Command::Version => {
            println!("textsum v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };
    if let Err(e) = &outcome {
        tracing::error!(error = %format!("{e:#}"), "command failed");
    }
    outcome
}

fn load_lexicon(args: &SummarizeArgs) -> anyhow::Result<Arc<Lexicon>> {
    if args.stopwords_file.is_none() && args.keywords_file.is_none() {
        return Ok(Lexicon::shared());
    }
    let mut lexicon = Lexicon::russian();
    if let Some(path) = &args.stopwords_file {
        let words = parse_word_list(&read_text_file(path)?);
        tracing::info!(count = words.len(), path = %path.display(), "stopwords loaded");
        lexicon = lexicon.with_stopwords(words);
    }
    if let Some(path) = &args.keywords_file {
        let words = parse_word_list(&read_text_file(path)?);
        tracing::info!(count = words.len(), path = %path.display(), "keywords loaded");
        lexicon = lexicon.with_keywords(words);
    }
    Ok(Arc::new(lexicon))
}

fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}

fn run_summarize(args: &SummarizeArgs) -> anyhow::Result<()> {
    args.validate().map_err(anyhow::Error::msg)?;

    tracing::info!(path = %args.input.display(), "reading input");
    let text = read_text_file(&args.input)?;
    if text.trim().is_empty() {
        tracing::warn!(path = %args.input.display(), "input is empty");
    }

    let summarizer = TextSummarizer::with_config(SummarizerConfig {
        method: args.method.into(),
        use_stopwords: !args.no_stopwords,
        lexicon: load_lexicon(args)?,
    });
    tracing::info!(method = %summarizer.method(), ratio = args.ratio, "summarizing");
    let result = summarizer
        .summarize(&text, args.ratio)
        .context("summarization failed")?;

    let output_dir: PathBuf = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    let stem = input_stem(&args.input);

    let summary_file = args
        .output
        .clone()
        .unwrap_or_else(|| output_dir.join(format!("{stem}_summary.txt")));
    write_text_file(&summary_file, &result.summary_text)?;
    tracing::info!(path = %summary_file.display(), "summary saved");

    if args.stats {
        let stats_file = output_dir.join(format!("{stem}_stats.json"));
        save_json(&stats_file, &StatisticsReport::new(&result.statistics, result.method_used))?;
        tracing::info!(path = %stats_file.display(), "statistics saved");
    }

    if args.output_dir.is_some() {
        let run_dir = output_dir.join(&stem);
        save_result(&result, &run_dir)?;
        tracing::info!(path = %run_dir.display(), "run artifacts saved");
    }

    if args.visualize {
        let charts_dir = output_dir.join(VISUALIZATIONS_DIR);
        let charts = plot_all(&result, &charts_dir)?;
        tracing::info!(count = charts.len(), path = %charts_dir.display(), "visualizations saved");
    }

    let stats = &result.statistics;
    println!("{RULE}");
    println!("Summarization complete");
    println!(
        "Original: {} sentences, {} words",
        stats.original_sentences_count, stats.original_words_count
    );
    println!(
        "Summary: {} sentences, {} words",
        stats.summary_sentences_count, stats.summary_words_count
    );
    println!("Compression: {:.1}%", stats.compression_ratio * 100.0);
    println!("Flesch (original): {:.1}", stats.original_readability.flesch_score);
    println!("Flesch (summary): {:.1}", stats.summary_readability.flesch_score);
    println!("{RULE}");
    Ok(())
}

fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text_file(path)?,
        (None, None) => anyhow::bail!("either --text or --file is required"),
    };

    let sentences = segment_sentences(&text);
    let metrics = compute_readability(&text);

    let mut frequencies: Vec<(String, f64)> =
        word_frequencies(&normalized_words(&text)).into_iter().collect();
    frequencies.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(TOP_WORDS);

    println!("{RULE}");
    println!("Text analysis:");
    println!("Sentences: {}", sentences.len());
    println!("Words: {}", metrics.total_words);
    println!("Unique words: {}", metrics.unique_words);
    println!("Flesch reading ease: {:.1}", metrics.flesch_score);
    println!("Average sentence length: {:.1} words", metrics.avg_sentence_length);
    println!("Lexical diversity: {:.3}", metrics.lexical_diversity);

    if !frequencies.is_empty() {
        println!("\nMost frequent words:");
        for (word, freq) in &frequencies {
            println!("  {word}: {:.3}", freq);
        }
    }

    let entities = extract_named_entities(&text);
    if !entities.is_empty() {
        println!("\nNamed entities: {}", entities.join(", "));
    }

    println!("\nSample sentences:");
    for (i, sentence) in sentences.iter().take(SAMPLE_SENTENCES).enumerate() {
        let preview: String = sentence.chars().take(SAMPLE_CHARS).collect();
        let ellipsis = if sentence.chars().count() > SAMPLE_CHARS { "..." } else { "" };
        println!("  {}. {preview}{ellipsis}", i + 1);
    }
    if sentences.len() > SAMPLE_SENTENCES {
        println!("  ... and {} more sentences", sentences.len() - SAMPLE_SENTENCES);
    }
    println!("{RULE}");
    Ok(())
}
