//! Application configuration.
//!
//! Loaded from `~/.config/quizterm/config.toml` (or the platform equivalent);
//! a missing file yields the defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, UiConfig, DEFAULT_QUIZ_URL};
