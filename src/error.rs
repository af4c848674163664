use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::source::SourceError;

/// Top-level failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Async runtime error: {0}")]
    Runtime(String),
}
