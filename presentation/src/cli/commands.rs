//! CLI command definitions

use clap::{Parser, ValueEnum};
use exam_domain::{GenerationRequest, OutputFormat as DomainOutputFormat, QuestionType};
use std::path::PathBuf;

/// Question types selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuestionTypeArg {
    /// Multiple-choice questions
    Mc,
    /// Open questions
    Open,
}

impl From<QuestionTypeArg> for QuestionType {
    fn from(arg: QuestionTypeArg) -> Self {
        match arg {
            QuestionTypeArg::Mc => QuestionType::MultipleChoice,
            QuestionTypeArg::Open => QuestionType::Open,
        }
    }
}

/// Output format for the generated exams
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown exam document
    Markdown,
    /// JSON dump of the exams
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => DomainOutputFormat::Markdown,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for exam-generator
#[derive(Parser, Debug)]
#[command(name = "exam-generator")]
#[command(author, version, about = "Generate exam questions from a text with an LLM")]
#[command(long_about = r#"
Exam Generator asks a language model for exam questions about a source text.

Multiple-choice questions are generated in batches until the requested
count is reached; open questions can come with rephrased variations. The
questions are then distributed over one or more exam copies.

Configuration files are loaded from (in priority order):
1. EXAM_* environment variables (e.g. EXAM_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./exam.toml         Project-level config
4. ~/.config/exam-generator/config.toml   Global config

Example:
  exam-generator notes.txt --mc 10 --answers 4
  exam-generator notes.txt --type open --open 12 --exams 3 --open-per-exam 4
  exam-generator notes.md --mc 5 --quiz
"#)]
pub struct Cli {
    /// Source text file (or directory of .txt/.md files)
    pub source: Option<PathBuf>,

    /// Question types to generate (can be specified multiple times; default: both)
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    pub types: Vec<QuestionTypeArg>,

    /// Number of multiple-choice questions to generate
    #[arg(long = "mc", value_name = "N", default_value_t = 5)]
    pub multiple_choice: usize,

    /// Options per multiple-choice question (default from config)
    #[arg(long, value_name = "N")]
    pub answers: Option<usize>,

    /// Number of open questions to generate
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub open: usize,

    /// Rephrased variations per open question
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub variations: usize,

    /// Number of exam copies to assemble (default from config)
    #[arg(long, value_name = "N")]
    pub exams: Option<usize>,

    /// Open questions per exam (default: split the pool evenly)
    #[arg(long, value_name = "N")]
    pub open_per_exam: Option<usize>,

    /// Multiple-choice questions per exam (default: split the pool evenly)
    #[arg(long, value_name = "N")]
    pub mc_per_exam: Option<usize>,

    /// Write the exams to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (default from config, then markdown)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Take the multiple-choice questions as an interactive quiz afterwards
    #[arg(long)]
    pub quiz: bool,

    /// Model name (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Selected question types; both when none were given
    pub fn question_types(&self) -> Vec<QuestionType> {
        if self.types.is_empty() {
            vec![QuestionType::MultipleChoice, QuestionType::Open]
        } else {
            self.types.iter().copied().map(QuestionType::from).collect()
        }
    }

    /// Build the generation request, falling back to `default_answers`
    pub fn generation_request(&self, default_answers: usize) -> GenerationRequest {
        GenerationRequest::new(self.question_types())
            .with_multiple_choice(
                self.multiple_choice,
                self.answers.unwrap_or(default_answers),
            )
            .with_open(self.open, self.variations)
    }
}
