//! Sequential batch execution with per-item failure isolation.

use crate::config::RunConfig;
use crate::error::Result;
use crate::output;
use crate::stt::Transcriber;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Outcome counts for one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    /// Failed files with their causes, in processing order.
    pub failures: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Process every selected file in order, one request in flight at a time.
///
/// A failure in either the remote call or the write is recorded against that
/// file and the batch continues; nothing a single item does can abort the
/// run. Failing items produce no output file.
pub async fn run_batch<T: Transcriber + ?Sized>(
    transcriber: &T,
    config: &RunConfig,
) -> RunSummary {
    let total = config.selected_files.len();
    let mut summary = RunSummary::default();

    for (idx, file) in config.selected_files.iter().enumerate() {
        summary.attempted += 1;
        println!("[{}/{}] Processing: {}", idx + 1, total, display_name(file));

        match process_file(transcriber, file, config).await {
            Ok(path) => {
                summary.succeeded += 1;
                println!("  {} saved to {}", "✓".green(), path.display());
            }
            Err(e) => {
                eprintln!("  {} {}", "✗".red(), e);
                summary.failures.push((file.clone(), e.to_string()));
            }
        }
    }

    summary
}

/// Transcribe one file and persist the result. The write only happens after
/// a successful remote call.
async fn process_file<T: Transcriber + ?Sized>(
    transcriber: &T,
    file: &Path,
    config: &RunConfig,
) -> Result<PathBuf> {
    let text = transcriber
        .transcribe(file, &config.model, config.prompt.as_deref())
        .await?;
    output::save_transcript(&text, file, &config.output_dir)
}

/// Render the end-of-run summary so the operator can see what needs
/// reprocessing.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "Processed {} file(s): {} succeeded, {} failed",
        summary.attempted,
        summary.succeeded.to_string().green(),
        if summary.failed() > 0 {
            summary.failed().to_string().red().to_string()
        } else {
            summary.failed().to_string()
        }
    );
    for (file, cause) in &summary.failures {
        println!("  {} {}: {}", "✗".red(), display_name(file), cause);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
