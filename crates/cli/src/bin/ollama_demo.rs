use anyhow::Result;
use clap::Parser;
use recap_cli::{init, run_ollama_demo, OllamaDemoArgs};

#[tokio::main]
async fn main() -> Result<()> {
    init()?;
    let args = OllamaDemoArgs::parse();

    if let Err(e) = run_ollama_demo(args).await {
        eprintln!("[ollama-demo error] {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
