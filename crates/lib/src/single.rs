//! # Single-Episode Fetch
//!
//! Saves the content of one page to its own text file, without the header
//! framing used by the aggregate file.

use recap_html::{episode_id_from_url, ContentExtractor};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::RecapConfig;
use crate::errors::FetchError;
use crate::fetch::fetch_content;

/// Default file name for a page: `<episode id>_summary.txt`.
pub fn default_output_path(url: &str) -> PathBuf {
    PathBuf::from(format!("{}_summary.txt", episode_id_from_url(url)))
}

/// Fetches `url`, extracts its content, and writes it to `output` (or to
/// [`default_output_path`]). Returns the path written.
pub async fn fetch_episode_summary(
    client: &Client,
    extractor: &ContentExtractor,
    url: &str,
    output: Option<&Path>,
) -> Result<PathBuf, FetchError> {
    println!("Fetching content from: {url}");

    let content = fetch_content(client, extractor, url).await?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(url));

    fs::write(&path, &content).map_err(|source| FetchError::Save {
        path: path.display().to_string(),
        source,
    })?;

    info!(url, path = %path.display(), "Saved episode summary");
    println!("Summary saved to: {}", path.display());
    println!("Content length: {} characters", content.chars().count());
    Ok(path)
}

/// Fetches several episodes by id through `config.episode_url_template`.
///
/// Each file gets its default name, placed in `output_dir` when given and in
/// the working directory otherwise. Failures are reported and skipped.
/// Returns the paths that were written, in the order of `episode_ids`.
pub async fn fetch_multiple_episodes(
    client: &Client,
    extractor: &ContentExtractor,
    episode_ids: &[String],
    config: &RecapConfig,
    output_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut saved = Vec::new();

    for episode_id in episode_ids {
        let url = config.episode_url(episode_id);
        let output = output_dir.map(|dir| dir.join(default_output_path(&url)));
        match fetch_episode_summary(client, extractor, &url, output.as_deref()).await {
            Ok(path) => saved.push(path),
            Err(e) => {
                error!(episode = %episode_id, error = %e, "Failed to fetch episode");
                println!("Error fetching {url}: {e}");
            }
        }
        println!();
    }

    println!(
        "\nSuccessfully fetched {} of {} episodes",
        saved.len(),
        episode_ids.len()
    );
    saved
}
