use serde::Deserialize;
use std::path::PathBuf;

/// One row of the episode list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchRequest {
    #[serde(rename = "season_episode")]
    pub identifier: String,
    #[serde(rename = "url")]
    pub source_url: String,
}

impl FetchRequest {
    pub fn new(identifier: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source_url: source_url.into(),
        }
    }
}

/// The outcome of fetching one episode. `content` is `None` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub identifier: String,
    pub content: Option<String>,
}

impl FetchResult {
    pub fn success(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: Some(content.into()),
        }
    }

    pub fn failure(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.content.is_some()
    }
}

/// Everything a batch run produced, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub succeeded: Vec<FetchResult>,
    pub failed: Vec<String>,
    /// Sum of Unicode scalar values over all successful content strings.
    pub total_characters: usize,
    /// Sum of whitespace-separated tokens over all successful content strings.
    pub total_words: usize,
}

impl AggregateReport {
    pub fn from_results(results: impl IntoIterator<Item = FetchResult>) -> Self {
        let mut report = Self::default();
        for result in results {
            match &result.content {
                Some(content) => {
                    report.total_characters += content.chars().count();
                    report.total_words += content.split_whitespace().count();
                    report.succeeded.push(result);
                }
                None => report.failed.push(result.identifier),
            }
        }
        report
    }

    /// Number of rows that were processed.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Final statistics of a `fetch_all_episodes` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchStats {
    pub total_episodes: usize,
    pub failed_episodes: usize,
    pub total_characters: usize,
    pub total_words: usize,
    pub output_file: PathBuf,
}

impl FetchStats {
    pub fn new(report: &AggregateReport, output_file: impl Into<PathBuf>) -> Self {
        Self {
            total_episodes: report.succeeded.len(),
            failed_episodes: report.failed.len(),
            total_characters: report.total_characters,
            total_words: report.total_words,
            output_file: output_file.into(),
        }
    }
}
