//! # recap-cli: Command-Line Front Ends
//!
//! Argument definitions and command logic for the `fetch-all-episodes`,
//! `fetch-episode-summary`, and `ollama-demo` binaries. Each binary is a thin
//! entrypoint that parses its arguments and calls the matching `run_*`
//! function here.

use anyhow::{Context, Result};
use clap::Parser;
use recap::providers::ai::{ChatMessage, OllamaClient, DEFAULT_OLLAMA_HOST};
use recap::{
    build_client, fetch_all_episodes, fetch_episode_summary, fetch_multiple_episodes, get_config,
    ContentExtractor, FetchStats,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_INPUT_FILE: &str = "season_episodes.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "mr_robot_all_episodes_summary.txt";
pub const DEFAULT_EPISODE_URL: &str =
    "https://mrrobot.fandom.com/wiki/405_Method_Not_Allowed/Summary";
pub const DEFAULT_MODEL: &str = "marcos_model";
pub const DEFAULT_PROMPT: &str = "Why did the chicken cross the road?";
pub const SAMPLE_SENTENCES: [&str; 2] = [
    "Here is an example sentence I will be embedding!",
    "Here's a second one!",
];

// --- CLI Argument Structs ---

/// Fetch every episode summary listed in a CSV file into one text file.
#[derive(Parser, Debug)]
#[command(name = "fetch-all-episodes", author, version, about, long_about = None)]
pub struct FetchAllArgs {
    /// CSV file with `season_episode` and `url` columns.
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,
    /// Text file receiving all episode summaries.
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}

/// Fetch a single episode summary page and save its text.
#[derive(Parser, Debug)]
#[command(name = "fetch-episode-summary", author, version, about, long_about = None)]
pub struct FetchEpisodeArgs {
    /// Summary page URL.
    #[arg(default_value = DEFAULT_EPISODE_URL)]
    pub url: String,
    /// Output file. Defaults to `<episode id>_summary.txt`.
    pub output: Option<PathBuf>,
    /// Fetch these episode ids through the configured URL template instead of `url`.
    #[arg(long = "episode", value_name = "ID", conflicts_with = "output")]
    pub episodes: Vec<String>,
}

/// Embed two sample sentences and ask one chat question against a local Ollama server.
#[derive(Parser, Debug)]
#[command(name = "ollama-demo", author, version, about, long_about = None)]
pub struct OllamaDemoArgs {
    /// Ollama server address.
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_HOST)]
    pub host: String,
    /// Model used for both embedding and chat.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
    /// The chat message to send.
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,
}

// --- Setup ---

/// Installs the stderr log subscriber and loads `.env`.
///
/// Console reports go to stdout; logs stay on stderr and default to warnings
/// for the `recap` crates (`RUST_LOG` overrides).
pub fn init() -> Result<()> {
    dotenvy::dotenv().ok();
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("recap=warn".parse()?)
                .add_directive("recap_cli=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// --- Command Handlers ---

/// Runs the batch fetch and prints the final statistics block.
pub async fn run_fetch_all(args: FetchAllArgs) -> Result<FetchStats> {
    let line = "=".repeat(70);
    println!("{line}");
    println!("Mr. Robot Episode Summary Fetcher");
    println!("{line}");
    println!("CSV file: {}", args.input.display());
    println!("Output file: {}", args.output.display());
    println!("{line}\n");

    let config = get_config().context("Failed to load configuration")?;
    info!("Starting batch fetch with config: {:?}", config);

    let stats = fetch_all_episodes(&args.input, &args.output, config).await?;

    println!("\n{line}");
    println!("FINAL STATISTICS");
    println!("{line}");
    println!("Total episodes fetched: {}", stats.total_episodes);
    println!("Failed episodes: {}", stats.failed_episodes);
    println!("Total characters: {}", thousands(stats.total_characters));
    println!("Total words: {}", thousands(stats.total_words));
    println!("Output file: {}", stats.output_file.display());
    println!("{line}");

    Ok(stats)
}

/// Fetches one page, or every `--episode` id, and returns the saved paths.
pub async fn run_fetch_episode(args: FetchEpisodeArgs) -> Result<Vec<PathBuf>> {
    let config = get_config().context("Failed to load configuration")?;
    let client = build_client(&config)?;
    let extractor = ContentExtractor::new(&config.content_selector)?;

    if !args.episodes.is_empty() {
        let saved =
            fetch_multiple_episodes(&client, &extractor, &args.episodes, &config, None).await;
        if saved.is_empty() {
            anyhow::bail!("None of the {} episodes could be fetched", args.episodes.len());
        }
        return Ok(saved);
    }

    let path = fetch_episode_summary(&client, &extractor, &args.url, args.output.as_deref())
        .await
        .with_context(|| format!("Error fetching URL {}", args.url))?;
    Ok(vec![path])
}

/// Embeds the sample sentences and sends one chat message, printing both results.
pub async fn run_ollama_demo(args: OllamaDemoArgs) -> Result<String> {
    let client = OllamaClient::new(&args.host)?;
    info!("Using Ollama at {} with model '{}'", client.host(), args.model);

    let embeddings = client.embed(&args.model, &SAMPLE_SENTENCES).await?;
    println!("{}", embeddings.len());

    let reply = client
        .chat(&args.model, &[ChatMessage::user(args.prompt)])
        .await?;
    println!("{}", reply.content);
    Ok(reply.content)
}

/// Formats an integer with `,` thousands separators.
pub fn thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
