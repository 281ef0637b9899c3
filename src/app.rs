//! Composition root: wires credential loading, config resolution, the remote
//! client, and the batch run.

use crate::cli::Cli;
use crate::config::{self, RunConfig};
use crate::runner;
use crate::stt::{OpenAiTranscriber, Transcriber};
use crate::wizard;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Execute one run. Returns an error only for configuration-level hard
/// stops (missing credential, empty discovery, prompt I/O); per-file
/// failures end in the summary with exit status 0.
pub async fn run(cli: Cli) -> Result<()> {
    let api_key = config::load_api_key()?;
    let transcriber = OpenAiTranscriber::new(api_key);

    let resolved = if cli.all {
        Some(resolve_implicit(&cli)?)
    } else {
        wizard::resolve()?
    };

    execute(resolved, &transcriber).await
}

/// Run the batch for a resolved configuration, or end cleanly when the
/// operator declined at confirmation (`None`). Declining touches neither the
/// transcriber nor the output directory.
pub async fn execute(resolved: Option<RunConfig>, transcriber: &dyn Transcriber) -> Result<()> {
    let Some(run_config) = resolved else {
        println!("Cancelled — nothing transcribed.");
        return Ok(());
    };

    let summary = runner::run_batch(transcriber, &run_config).await;
    runner::print_summary(&summary);

    Ok(())
}

fn resolve_implicit(cli: &Cli) -> Result<RunConfig> {
    let cwd = std::env::current_dir()?;
    println!("Searching for MP3 files in: {}", cwd.display());

    let config = RunConfig::implicit(
        &cwd,
        cli.model.clone(),
        cli.prompt.clone(),
        cli.output.clone(),
    )?;

    println!("Found {} MP3 file(s):", config.selected_files.len());
    for file in &config.selected_files {
        println!("  {} {}", "-".dimmed(), file.display());
    }

    Ok(config)
}
