//! Progress reporting for question generation

use colored::Colorize;
use exam_application::GenerationProgress;
use exam_domain::QuestionType;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;

/// Reports generation progress with one progress bar per question type
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<QuestionType, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn type_label(question_type: QuestionType) -> &'static str {
        match question_type {
            QuestionType::MultipleChoice => "Multiple choice",
            QuestionType::Open => "Open",
        }
    }

    fn with_bar(&self, question_type: QuestionType, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bars) = self.bars.lock()
            && let Some(pb) = bars.get(&question_type)
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_batch_start(&self, question_type: QuestionType, requested: usize) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };
        let pb = bars.entry(question_type).or_insert_with(|| {
            let pb = self.multi.add(ProgressBar::new(requested as u64));
            pb.set_style(Self::bar_style());
            pb.set_prefix(Self::type_label(question_type));
            pb.enable_steady_tick(std::time::Duration::from_millis(120));
            pb
        });
        pb.set_message(format!("requesting {}...", requested));
    }

    fn on_batch_complete(&self, question_type: QuestionType, produced: usize, total: usize) {
        self.with_bar(question_type, |pb| {
            pb.set_length(total as u64);
            pb.set_position(produced as u64);
            pb.set_message(format!("{} batch parsed", "v".green()));
        });
    }

    fn on_batch_empty(&self, question_type: QuestionType, attempt: usize, max_attempts: usize) {
        self.with_bar(question_type, |pb| {
            pb.set_message(format!(
                "{} no usable question ({}/{})",
                "!".yellow(),
                attempt,
                max_attempts
            ));
        });
    }

    fn on_variations_complete(&self, _question_id: usize, done: usize, total: usize) {
        self.with_bar(QuestionType::Open, |pb| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
            pb.set_message("variations");
        });
    }

    fn on_generation_complete(&self, question_type: QuestionType, produced: usize) {
        if let Ok(mut bars) = self.bars.lock()
            && let Some(pb) = bars.remove(&question_type)
        {
            pb.finish_with_message(format!("{} {} ready", "v".green(), produced));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_batch_start(&self, question_type: QuestionType, requested: usize) {
        eprintln!(
            "{} {} ({} requested)",
            "->".cyan(),
            ProgressReporter::type_label(question_type).bold(),
            requested
        );
    }

    fn on_batch_complete(&self, _question_type: QuestionType, produced: usize, total: usize) {
        eprintln!("  {} {}/{}", "v".green(), produced, total);
    }

    fn on_batch_empty(&self, _question_type: QuestionType, attempt: usize, max_attempts: usize) {
        eprintln!(
            "  {} no usable question ({}/{})",
            "x".red(),
            attempt,
            max_attempts
        );
    }

    fn on_variations_complete(&self, question_id: usize, done: usize, total: usize) {
        eprintln!("  {} variations for #{} ({}/{})", "~".dimmed(), question_id, done, total);
    }
}
