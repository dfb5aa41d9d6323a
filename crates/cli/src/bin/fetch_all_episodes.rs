//! Thin entrypoint for the batch fetcher; all logic lives in `recap_cli`.

use anyhow::Result;
use clap::Parser;
use recap_cli::{init, run_fetch_all, FetchAllArgs};

#[tokio::main]
async fn main() -> Result<()> {
    init()?;
    let args = FetchAllArgs::parse();

    if let Err(e) = run_fetch_all(args).await {
        eprintln!("[fetch-all-episodes error] {e:?}");
        std::process::exit(1);
    }

    Ok(())
}
