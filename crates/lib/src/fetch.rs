//! # Page Fetching
//!
//! One GET per page, no retries. Everything that can go wrong with a single
//! page is returned as a [`FetchError`] so the caller decides whether it is
//! fatal.

use recap_html::ContentExtractor;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::RecapConfig;
use crate::errors::{FetchError, RecapError};
use crate::types::{FetchRequest, FetchResult};

/// Builds the HTTP client shared by every request of a run.
pub fn build_client(config: &RecapConfig) -> Result<Client, RecapError> {
    let mut builder = Client::builder().timeout(config.timeout());
    if let Some(agent) = config.user_agent.as_deref() {
        builder = builder.user_agent(agent);
    }
    builder.build().map_err(RecapError::ClientBuild)
}

/// Issues a single GET and returns the body. Non-2xx statuses are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Fetches a page and extracts its episode content.
pub async fn fetch_content(
    client: &Client,
    extractor: &ContentExtractor,
    url: &str,
) -> Result<String, FetchError> {
    let body = fetch_page(client, url).await?;
    Ok(extractor.extract(&body)?)
}

/// Fetches one row of the batch, reporting progress on stdout.
///
/// Never fails: any error, as well as a content region without paragraph text,
/// becomes a [`FetchResult`] without content.
pub async fn fetch_episode(
    client: &Client,
    extractor: &ContentExtractor,
    request: &FetchRequest,
) -> FetchResult {
    let id = &request.identifier;
    println!("Fetching {id}: {}", request.source_url);

    let outcome = fetch_content(client, extractor, &request.source_url)
        .await
        .and_then(|content| {
            if content.is_empty() {
                Err(FetchError::EmptyContent)
            } else {
                Ok(content)
            }
        });

    match outcome {
        Ok(content) => {
            let length = content.chars().count();
            info!(episode = %id, characters = length, "Fetched episode");
            println!("  ✓ Successfully fetched {id} ({length} characters)");
            FetchResult::success(id.as_str(), content)
        }
        Err(FetchError::Network(e)) => {
            warn!(episode = %id, error = %e, "Network error");
            println!("  ✗ Error fetching {id}: {e}");
            FetchResult::failure(id.as_str())
        }
        Err(e) => {
            warn!(episode = %id, error = %e, "Could not extract episode content");
            println!("  ⚠ Warning: {e} for {id}");
            FetchResult::failure(id.as_str())
        }
    }
}
