use anyhow::Result;
use clap::Parser;
use recap_cli::{init, run_fetch_episode, FetchEpisodeArgs};

#[tokio::main]
async fn main() -> Result<()> {
    init()?;
    let args = FetchEpisodeArgs::parse();

    if let Err(e) = run_fetch_episode(args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
