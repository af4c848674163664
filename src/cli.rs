use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "quizterm", version, about = "Timed multiple-choice quizzes in the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/quizterm/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch the quiz from this URL instead of the configured source
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Load the quiz from a local JSON file instead of the configured source
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Validate a quiz JSON file and exit
    #[arg(long, value_name = "PATH")]
    pub check: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
            config.source.file = None;
        }
        if let Some(file) = &self.file {
            config.source.file = Some(file.clone());
        }
    }
}
