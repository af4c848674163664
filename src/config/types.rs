use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Quiz endpoint used when no source is configured.
pub const DEFAULT_QUIZ_URL: &str = "https://s3.vclasses.net/dev-alsamerre/quiz";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the quiz set is retrieved from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Quiz endpoint returning the quiz JSON document.
    #[serde(default = "default_url")]
    pub url: String,
    /// Local quiz JSON file. Takes precedence over `url` when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/input poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_url() -> String {
    DEFAULT_QUIZ_URL.to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
