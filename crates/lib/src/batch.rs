//! # Batch Fetch
//!
//! Walks the episode list strictly in order, pausing after every request, and
//! aggregates the results into one report and one output file.

use recap_html::ContentExtractor;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

use crate::config::RecapConfig;
use crate::errors::RecapError;
use crate::fetch::{build_client, fetch_episode};
use crate::input::read_requests;
use crate::output::{delimiter, write_episodes};
use crate::types::{AggregateReport, FetchRequest, FetchResult, FetchStats};

/// Sequential, rate-limited episode fetcher.
#[derive(Debug, Clone)]
pub struct BatchFetcher {
    client: Client,
    extractor: ContentExtractor,
    config: RecapConfig,
}

impl BatchFetcher {
    pub fn new(config: RecapConfig) -> Result<Self, RecapError> {
        Ok(Self {
            client: build_client(&config)?,
            extractor: ContentExtractor::new(&config.content_selector)?,
            config,
        })
    }

    /// Processes every request in input order. Per-request failures are
    /// recorded in the report and never stop the loop.
    pub async fn run(&self, requests: &[FetchRequest]) -> AggregateReport {
        let delay = self.config.delay();
        let mut results: Vec<FetchResult> = Vec::with_capacity(requests.len());

        for request in requests {
            results.push(fetch_episode(&self.client, &self.extractor, request).await);
            if let Some(pause) = delay {
                debug!("Sleeping {:?} before the next request", pause);
                tokio::time::sleep(pause).await;
            }
        }

        AggregateReport::from_results(results)
    }
}

/// Reads `input`, fetches every episode, writes the successes to `output`,
/// and returns the run statistics.
///
/// Only an unreadable input list (checked before any request) or an unwritable
/// output file aborts the run.
pub async fn fetch_all_episodes(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: RecapConfig,
) -> Result<FetchStats, RecapError> {
    let input = input.as_ref();
    let output = output.as_ref();

    println!("Reading episodes from: {}\n", input.display());
    let requests = read_requests(input)?;
    info!("Loaded {} episodes from {}", requests.len(), input.display());

    let fetcher = BatchFetcher::new(config)?;
    let report = fetcher.run(&requests).await;

    print_summary(&report);

    println!("Writing all episodes to: {}", output.display());
    write_episodes(output, &report.succeeded)?;
    println!(
        "✓ Successfully wrote {} episodes to {}",
        report.succeeded.len(),
        output.display()
    );

    Ok(FetchStats::new(&report, output))
}

fn print_summary(report: &AggregateReport) {
    let line = delimiter();
    println!("\n{line}");
    println!(
        "Fetch complete: {} successful, {} failed",
        report.succeeded.len(),
        report.failed.len()
    );
    if !report.failed.is_empty() {
        println!("Failed episodes: {}", report.failed.join(", "));
    }
    println!("{line}\n");
}
