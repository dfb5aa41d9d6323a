use recap_html::HtmlError;
use thiserror::Error;

/// Fatal errors that abort a run before or after the fetch loop.
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Failed to read input file '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to write output file '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("HTML extractor setup failed: {0}")]
    Html(#[from] HtmlError),
}

/// Errors confined to a single page fetch.
///
/// The batch loop records these as failures and moves on; the single-episode
/// path hands them back to its caller.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Extract(#[from] HtmlError),
    #[error("Content div contained no paragraph text")]
    EmptyContent,
    #[error("Failed to save '{path}': {source}")]
    Save {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by the LLM client.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI API returned an error (status {status}): {body}")]
    AiApi { status: u16, body: String },
    #[error("AI API returned an empty response")]
    EmptyResponse,
}
