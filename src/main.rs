use anyhow::Result;
use batchscribe::app;
use batchscribe::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the credential; a missing file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    app::run(cli).await
}
