//! # recap-html: Episode Content Extraction
//!
//! This crate turns a raw wiki page into the plain-text episode content used by
//! both the single-episode and the batch fetchers. It locates one content
//! region, keeps its paragraph text in document order, and normalizes the
//! whitespace of every paragraph.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use thiserror::Error;

/// The content region of a MediaWiki/Fandom article body.
pub const DEFAULT_CONTENT_SELECTOR: &str = "div.mw-content-ltr.mw-parser-output";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace regex is valid"));

// --- Error Definitions ---

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlError {
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("Could not find the content region matching '{0}'")]
    ContentNotFound(String),
}

// --- Extraction ---

/// Extracts cleaned paragraph text from a single content region of a page.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    region_source: String,
    region: Selector,
    paragraph: Selector,
}

impl ContentExtractor {
    /// Creates an extractor for the first element matching `region_selector`.
    pub fn new(region_selector: &str) -> Result<Self, HtmlError> {
        Ok(Self {
            region_source: region_selector.to_string(),
            region: parse_selector(region_selector)?,
            paragraph: parse_selector("p")?,
        })
    }

    /// The selector this extractor was built from.
    pub fn region_selector(&self) -> &str {
        &self.region_source
    }

    /// Returns the region's non-empty paragraphs, whitespace-collapsed and
    /// joined with `\n`.
    ///
    /// A region that exists but holds no paragraph text yields an empty string;
    /// deciding whether that counts as a failure is left to the caller.
    pub fn extract(&self, html: &str) -> Result<String, HtmlError> {
        let document = Html::parse_document(html);
        let region = document
            .select(&self.region)
            .next()
            .ok_or_else(|| HtmlError::ContentNotFound(self.region_source.clone()))?;

        let paragraphs: Vec<String> = region
            .select(&self.paragraph)
            .map(paragraph_text)
            .filter(|text| !text.is_empty())
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        // The default selector is a compile-time constant known to parse.
        Self::new(DEFAULT_CONTENT_SELECTOR).expect("default content selector is valid")
    }
}

/// Extracts episode content with the default wiki content region.
pub fn extract_content(html: &str) -> Result<String, HtmlError> {
    ContentExtractor::default().extract(html)
}

/// Collapses every whitespace run (newlines included) into one space and trims
/// the ends.
pub fn clean_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Derives an episode id from a wiki URL.
///
/// `https://mrrobot.fandom.com/wiki/405_Method_Not_Allowed/Summary` becomes
/// `405_Method_Not_Allowed`.
pub fn episode_id_from_url(url: &str) -> String {
    let tail = url.rsplit("/wiki/").next().unwrap_or(url);
    tail.split('/').next().unwrap_or(tail).to_string()
}

fn paragraph_text(paragraph: ElementRef<'_>) -> String {
    let joined = paragraph
        .text()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    clean_text(&joined)
}

fn parse_selector(selector: &str) -> Result<Selector, HtmlError> {
    Selector::parse(selector).map_err(|e| HtmlError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
