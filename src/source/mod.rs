//! Quiz set retrieval.
//!
//! The session core treats retrieval as an opaque collaborator: call
//! [`QuizSource::fetch`], await exactly one of success or failure, and hand
//! the outcome back to the session machine. Structural validation of the
//! payload happens in the session, not here.

mod error;
mod file;
mod http;

pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;

use crate::config::SourceConfig;
use crate::quiz::QuizSet;

/// Where quiz sets come from.
#[derive(Debug, Clone)]
pub enum QuizSource {
    Http(HttpSource),
    File(FileSource),
}

impl QuizSource {
    /// Build the source described by config. A configured file takes
    /// precedence over the URL.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        match &config.file {
            Some(path) => Ok(QuizSource::File(FileSource::new(path.clone()))),
            None => Ok(QuizSource::Http(HttpSource::new(config.url.clone(), config)?)),
        }
    }

    pub async fn fetch(&self) -> Result<QuizSet, SourceError> {
        match self {
            QuizSource::Http(source) => source.fetch().await,
            QuizSource::File(source) => source.fetch().await,
        }
    }

    /// Human-readable origin, for logs and the start screen.
    pub fn describe(&self) -> String {
        match self {
            QuizSource::Http(source) => source.url().to_string(),
            QuizSource::File(source) => source.path().display().to_string(),
        }
    }
}

/// Decode a quiz document from its JSON text.
pub fn parse_quiz(content: &str) -> Result<QuizSet, SourceError> {
    Ok(serde_json::from_str(content)?)
}
