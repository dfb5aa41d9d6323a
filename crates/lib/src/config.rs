//! # Fetcher Configuration
//!
//! Settings are resolved in layers: programmatic defaults, then an optional
//! `recap.yml` in the working directory, then `RECAP_*` environment variables
//! (e.g. `RECAP_DELAY_SECONDS=0.5`).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use recap_html::DEFAULT_CONTENT_SELECTOR;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::errors::RecapError;

pub const DEFAULT_DELAY_SECONDS: f64 = 1.0;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_EPISODE_URL_TEMPLATE: &str = "https://mrrobot.fandom.com/wiki/{}/Summary";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecapConfig {
    /// Pause after every request, successful or not. Values `<= 0` disable it.
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: f64,
    /// Ceiling for a single HTTP GET.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// CSS selector of the article region holding the episode paragraphs.
    #[serde(default = "default_content_selector")]
    pub content_selector: String,
    /// URL template for fetching episodes by id; `{}` is replaced by the id.
    #[serde(default = "default_episode_url_template")]
    pub episode_url_template: String,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_delay_seconds() -> f64 {
    DEFAULT_DELAY_SECONDS
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_content_selector() -> String {
    DEFAULT_CONTENT_SELECTOR.to_string()
}

fn default_episode_url_template() -> String {
    DEFAULT_EPISODE_URL_TEMPLATE.to_string()
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            delay_seconds: default_delay_seconds(),
            timeout_seconds: default_timeout_seconds(),
            content_selector: default_content_selector(),
            episode_url_template: default_episode_url_template(),
            user_agent: None,
        }
    }
}

impl RecapConfig {
    /// Returns the inter-request pause, or `None` when pacing is disabled.
    ///
    /// Values too large for a `Duration` (including infinity) saturate at
    /// `Duration::MAX`.
    pub fn delay(&self) -> Option<Duration> {
        if self.delay_seconds.is_nan() || self.delay_seconds <= 0.0 {
            return None;
        }
        Some(Duration::try_from_secs_f64(self.delay_seconds).unwrap_or(Duration::MAX))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Builds the URL for an episode id from `episode_url_template`.
    pub fn episode_url(&self, episode_id: &str) -> String {
        self.episode_url_template.replacen("{}", episode_id, 1)
    }

    pub fn with_delay(mut self, delay_seconds: f64) -> Self {
        self.delay_seconds = delay_seconds;
        self
    }
}

/// Loads the configuration from `recap.yml` (if present) and the environment.
pub fn get_config() -> Result<RecapConfig, RecapError> {
    get_config_from(None)
}

/// Loads the configuration, reading the YAML layer from `path` instead of the
/// working directory's `recap.yml`. A missing file is not an error.
pub fn get_config_from(path: Option<&str>) -> Result<RecapConfig, RecapError> {
    let file_path = path.unwrap_or("recap.yml");
    if std::path::Path::new(file_path).exists() {
        info!("Loading fetcher configuration from '{file_path}'.");
    }

    let settings = ConfigBuilder::builder()
        .set_default("delay_seconds", DEFAULT_DELAY_SECONDS)?
        .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
        .set_default("content_selector", DEFAULT_CONTENT_SELECTOR)?
        .set_default("episode_url_template", DEFAULT_EPISODE_URL_TEMPLATE)?
        .add_source(File::new(file_path, FileFormat::Yaml).required(false))
        .add_source(
            Environment::with_prefix("RECAP")
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
