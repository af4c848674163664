//! Quiz retrieval over HTTP.

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::SourceConfig;
use crate::quiz::QuizSet;

use super::error::SourceError;
use super::parse_quiz;

/// Fetches the quiz document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Build a source for `url` using the timeouts from `config`.
    pub fn new(url: impl Into<String>, config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|err| SourceError::Client(err.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<QuizSet, SourceError> {
        tracing::debug!(url = %self.url, "Fetching quiz");

        let start = Instant::now();
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::error!(status = %status, url = %self.url, "Quiz fetch failed");
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let quiz = parse_quiz(&body)?;

        tracing::info!(
            url = %self.url,
            latency_ms = start.elapsed().as_millis() as u64,
            questions = quiz.len(),
            "Quiz fetched"
        );
        Ok(quiz)
    }
}
