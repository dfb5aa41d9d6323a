//! # recap: Episode Summary Fetcher
//!
//! This crate fetches episode summary pages from a wiki, extracts their plot
//! paragraphs as plain text, and aggregates them into a single text file. It
//! also ships a small client for a local Ollama server's chat and embedding
//! endpoints.
//!
//! The batch path ([`fetch_all_episodes`]) and the single-page path
//! ([`fetch_episode_summary`]) share one extraction procedure from
//! `recap-html`.

pub mod batch;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod input;
pub mod output;
pub mod providers;
pub mod single;
pub mod types;

pub use batch::{fetch_all_episodes, BatchFetcher};
pub use config::{get_config, RecapConfig};
pub use errors::{FetchError, PromptError, RecapError};
pub use fetch::{build_client, fetch_episode, fetch_page};
pub use input::read_requests;
pub use output::{render_episodes, write_episodes};
pub use recap_html::ContentExtractor;
pub use single::{fetch_episode_summary, fetch_multiple_episodes};
pub use types::{AggregateReport, FetchRequest, FetchResult, FetchStats};
