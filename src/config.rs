use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use textsum::SummaryMethod;

#[derive(Debug, Clone, Parser)]
#[command(name = "textsum")]
#[command(about = "Extractive text summarizer with readability statistics", long_about = None)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Summarize a text file
    Summarize(SummarizeArgs),
    /// Print readability statistics for a text
    Analyze(AnalyzeArgs),
    /// Print the program version
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Frequency,
    #[value(alias = "feature_based")]
    Feature,
}

impl From<MethodArg> for SummaryMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Frequency => SummaryMethod::FrequencyBased,
            MethodArg::Feature => SummaryMethod::FeatureBased,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SummarizeArgs {
    /// Input text file
    #[arg(long, short)]
    pub input: PathBuf,

    /// Summary file (default: <input stem>_summary.txt)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[arg(long, short, value_enum, env = "SUMMARY_METHOD", default_value = "feature")]
    pub method: MethodArg,

    /// Fraction of sentences to keep, in (0, 1]
    #[arg(long, short, env = "SUMMARY_RATIO", default_value_t = 0.3)]
    pub ratio: f64,

    /// Save statistics as JSON next to the summary
    #[arg(long, short)]
    pub stats: bool,

    /// Render PNG charts into <output dir>/visualizations
    #[arg(long, short)]
    pub visualize: bool,

    /// Directory for output files
    #[arg(long = "output-dir", short = 'd')]
    pub output_dir: Option<PathBuf>,

    /// Keep stopwords when scoring by frequency
    #[arg(long)]
    pub no_stopwords: bool,

    /// Replace the built-in stopwords (one word per line)
    #[arg(long)]
    pub stopwords_file: Option<PathBuf>,

    /// Replace the built-in topic keywords (one word per line)
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(long, short)]
    pub text: Option<String>,

    /// File with the text to analyze
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }
}

impl SummarizeArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(format!("ratio must be in (0, 1], got {}", self.ratio));
        }
        if !self.input.exists() {
            return Err(format!("input file does not exist: {}", self.input.display()));
        }
        Ok(())
    }
}
