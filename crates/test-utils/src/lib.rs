//! # Common Test Utilities
//!
//! Shared fixtures for the fetcher tests: tracing setup, wiki-like HTML pages,
//! mock page mounting, and episode list files.

use anyhow::Result;
use dotenvy::dotenv;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

// --- HTML Fixtures ---

/// Builds a wiki page whose article region holds the given paragraphs.
pub fn episode_page(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("      <p>{p}</p>\n"))
        .collect();
    format!(
        "<html>\n  <head><title>Summary</title></head>\n  <body>\n    <nav><p>Fandom navigation</p></nav>\n    <div class=\"mw-content-ltr mw-parser-output\" lang=\"en\" dir=\"ltr\">\n{body}    </div>\n  </body>\n</html>\n"
    )
}

/// A page without the article region.
pub fn page_without_content() -> String {
    "<html><body><div class=\"page-header\"><p>Nothing here</p></div></body></html>".to_string()
}

// --- Mock Server Helpers ---

/// Serves `body` with `status` for GET `route`.
pub async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// --- File Fixtures ---

/// Writes an episode list CSV with a header row and returns its path.
pub fn write_episode_csv(dir: &Path, rows: &[(&str, String)]) -> Result<PathBuf> {
    let mut content = String::from("season_episode,url\n");
    for (id, url) in rows {
        content.push_str(&format!("{id},{url}\n"));
    }
    let file_path = dir.join("season_episodes.csv");
    fs::write(&file_path, content)?;
    Ok(file_path)
}
