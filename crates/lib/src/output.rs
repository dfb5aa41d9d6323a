//! Renders successful episodes into the aggregate text file.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::RecapError;
use crate::types::FetchResult;

pub const DELIMITER_WIDTH: usize = 70;

/// The `=` line framing each episode header.
pub fn delimiter() -> String {
    "=".repeat(DELIMITER_WIDTH)
}

/// Renders the framed episode blocks, separated by one blank line, with no
/// separator after the last block. Failed results are skipped.
pub fn render_episodes(episodes: &[FetchResult]) -> String {
    let line = delimiter();
    episodes
        .iter()
        .filter_map(|episode| {
            episode.content.as_deref().map(|content| {
                format!(
                    "{line}\nEPISODE: {}\n{line}\n\n{content}",
                    episode.identifier
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes the rendering to `path`, truncating any existing file.
pub fn write_episodes(path: impl AsRef<Path>, episodes: &[FetchResult]) -> Result<(), RecapError> {
    let path = path.as_ref();
    fs::write(path, render_episodes(episodes)).map_err(|source| RecapError::Output {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote {} episodes to {}", episodes.len(), path.display());
    Ok(())
}
