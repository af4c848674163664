use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use quizterm::cli::Cli;
use quizterm::logging::init_tracing;
use quizterm::quiz::QuizSet;
use quizterm::source::FileSource;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(path) = &cli.check {
        return Ok(check(path));
    }

    let config = cli.resolve_config()?;
    quizterm::ui::run(config)?;
    Ok(ExitCode::SUCCESS)
}

/// Validate a quiz file without starting the UI.
fn check(path: &Path) -> ExitCode {
    match load_checked(path) {
        Ok(quiz) => {
            println!(
                "OK: {} ({} questions, {} marks, {} min)",
                quiz.title,
                quiz.len(),
                quiz.total_marks,
                quiz.time_in_minutes
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_checked(path: &Path) -> anyhow::Result<QuizSet> {
    let quiz = FileSource::new(path).read()?;
    quiz.validate()?;
    Ok(quiz)
}
