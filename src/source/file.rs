//! Quiz retrieval from a local JSON document.

use std::path::{Path, PathBuf};

use crate::quiz::QuizSet;

use super::error::SourceError;
use super::parse_quiz;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn fetch(&self) -> Result<QuizSet, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        let quiz = parse_quiz(&content)?;
        tracing::info!(path = %self.path.display(), questions = quiz.len(), "Quiz file loaded");
        Ok(quiz)
    }

    /// Blocking variant for use outside the runtime (e.g. `--check`).
    pub fn read(&self) -> Result<QuizSet, SourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        parse_quiz(&content)
    }

    fn io_error(&self, source: std::io::Error) -> SourceError {
        SourceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
