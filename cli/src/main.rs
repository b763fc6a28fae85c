//! CLI entrypoint for Exam Generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use exam_application::{
    AssembleExamsUseCase, ClarifyQuestionUseCase, DocumentSource, GenerateQuestionsInput,
    GenerateQuestionsUseCase, NoTranscriptLogger, TranscriptLogger,
};
use exam_domain::{ExamLayout, Question, QuestionType};
use exam_infrastructure::{
    ConfigLoader, FileConfig, FileDocumentSource, JsonlTranscriptLogger, OpenAiCompletionService,
    OpenAiSettings,
};
use exam_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, QuizRunner, SimpleProgress, formatter_for,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(answers) = cli.answers {
        config.generation.answers_per_question = answers;
    }
    if let Some(exams) = cli.exams {
        config.exam.exam_count = exams;
    }
    config.validate().context("invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Exam Generator");

    let Some(source) = cli.source.as_ref() else {
        bail!("A source file is required. Run with --help for usage.");
    };

    // === Dependency Injection ===
    let settings = OpenAiSettings::from_config(&config.provider)?;
    let completion = Arc::new(OpenAiCompletionService::new(settings)?);
    let transcript = transcript_logger(&config);

    let document = FileDocumentSource::new(source);
    let content = document.read().await?;

    let request = cli.generation_request(config.generation.answers_per_question);
    let use_case = GenerateQuestionsUseCase::new(Arc::clone(&completion))
        .with_params(config.generation.to_params())
        .with_transcript_logger(transcript);

    let input = GenerateQuestionsInput::new(content, request);
    let mut questions = if cli.quiet {
        use_case.generate(input).await?
    } else if cli.verbose > 0 {
        use_case.generate_with_progress(input, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.generate_with_progress(input, &progress).await?
    };

    if cli.verbose > 0 {
        eprintln!("{}", ConsoleFormatter::format_questions(&questions));
    }

    // === Exams ===
    let layout = exam_layout(&cli, &config, &questions);
    let exams = AssembleExamsUseCase::new().execute(&questions, &layout)?;

    let format = cli
        .format
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let rendered = formatter_for(format).format_exams(&exams);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!(
                    "{} -> {}",
                    ConsoleFormatter::format_summary(&exams),
                    path.display()
                );
            }
        }
        None => println!("{}", rendered),
    }

    // === Quiz ===
    if cli.quiz {
        let score = QuizRunner::stdio().run(&mut questions)?;
        info!(
            correct = score.correct,
            total = score.total,
            "Quiz finished ({:.0}%)",
            score.percentage()
        );

        if !score.missed.is_empty() {
            let clarify = ClarifyQuestionUseCase::new(Arc::clone(&completion));
            for question in questions.iter().filter(|q| {
                q.question_type() == QuestionType::MultipleChoice && score.missed.contains(&q.id())
            }) {
                let explanation = clarify.execute(question).await?;
                println!("{} {}", "Why?".cyan().bold(), question.text());
                println!("{}\n", ConsoleFormatter::indent(&explanation, "  "));
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing into a file
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {log_file}"))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}

fn transcript_logger(config: &FileConfig) -> Arc<dyn TranscriptLogger> {
    let Some(path) = config.logging.transcript.as_deref() else {
        return Arc::new(NoTranscriptLogger);
    };

    match JsonlTranscriptLogger::new(path) {
        Some(logger) => {
            info!("Recording transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Transcript disabled: could not open {}", path);
            Arc::new(NoTranscriptLogger)
        }
    }
}

/// Per-exam quotas from flags, then config, then an even split of the pool
fn exam_layout(cli: &Cli, config: &FileConfig, questions: &[Question]) -> ExamLayout {
    let exam_count = config.exam.exam_count;
    let pool = |question_type: QuestionType| {
        questions
            .iter()
            .filter(|q| q.question_type() == question_type)
            .count()
    };

    let multiple_choice_per_exam = cli
        .mc_per_exam
        .or(config.exam.multiple_choice_per_exam)
        .unwrap_or_else(|| pool(QuestionType::MultipleChoice) / exam_count);
    let open_per_exam = cli
        .open_per_exam
        .or(config.exam.open_per_exam)
        .unwrap_or_else(|| pool(QuestionType::Open) / exam_count);

    ExamLayout::new(exam_count)
        .with_multiple_choice_per_exam(multiple_choice_per_exam)
        .with_open_per_exam(open_per_exam)
}
