//! Interactive configuration wizard.
//!
//! An ordered chain of validated prompts that accumulates into an immutable
//! [`RunConfig`]. Every validation failure re-prompts with a descriptive
//! message; filesystem checks run at resolution time, never cached.

use crate::config::{RunConfig, RunMode, DEFAULT_MODEL, MODELS};
use crate::error::{BatchscribeError, Result};
use crate::scan;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT_DIR: &str = "./inputs";
const DEFAULT_OUTPUT_DIR: &str = "./outputs";

/// Run the wizard to completion.
///
/// Returns `Ok(None)` when the operator declines the final confirmation (a
/// clean end, not an error). Zero discovered files in multiple-file mode is
/// a hard stop surfaced as [`BatchscribeError::NoAudioFiles`].
pub fn resolve() -> Result<Option<RunConfig>> {
    let mode = prompt_mode()?;

    let (selected_files, output_dir) = match mode {
        RunMode::Single => {
            let file = prompt_audio_file()?;
            let output_dir = prompt_directory("Output directory", DEFAULT_OUTPUT_DIR)?;
            (vec![file], output_dir)
        }
        RunMode::Multiple => {
            let input_dir = prompt_directory("Input directory", DEFAULT_INPUT_DIR)?;
            let output_dir = prompt_directory("Output directory", DEFAULT_OUTPUT_DIR)?;

            let found = scan::find_audio_files(&input_dir);
            if found.is_empty() {
                return Err(BatchscribeError::NoAudioFiles {
                    directory: input_dir.display().to_string(),
                });
            }

            let selected = prompt_file_selection(&found)?;
            (selected, output_dir)
        }
    };

    let model = prompt_model()?;
    let prompt = prompt_context_hint()?;

    let config = RunConfig {
        mode,
        selected_files,
        output_dir,
        model,
        prompt,
    };

    println!();
    print!("{}", config.summary());

    let confirmed = Confirm::new()
        .with_prompt("Proceed with transcription?")
        .default(true)
        .interact()?;

    if confirmed {
        Ok(Some(config))
    } else {
        Ok(None)
    }
}

fn prompt_mode() -> Result<RunMode> {
    let choice = Select::new()
        .with_prompt("What do you want to transcribe?")
        .items(&["A single file", "Multiple files from a directory"])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => RunMode::Single,
        _ => RunMode::Multiple,
    })
}

fn prompt_audio_file() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Path to the MP3 file")
        .validate_with(|value: &String| validate_audio_file(value))
        .interact_text()?;
    Ok(PathBuf::from(input))
}

fn prompt_directory(prompt: &str, default: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|value: &String| validate_directory(value))
        .interact_text()?;
    Ok(PathBuf::from(input))
}

fn prompt_file_selection(found: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let labels: Vec<String> = found
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();
    let all_checked = vec![true; found.len()];

    loop {
        let picks = MultiSelect::new()
            .with_prompt("Select files to transcribe (space toggles, enter confirms)")
            .items(&labels)
            .defaults(&all_checked)
            .interact()?;

        if picks.is_empty() {
            eprintln!("Select at least one file");
            continue;
        }

        return Ok(picks.into_iter().map(|i| found[i].clone()).collect());
    }
}

fn prompt_model() -> Result<String> {
    let labels: Vec<String> = MODELS
        .iter()
        .map(|m| {
            if *m == DEFAULT_MODEL {
                format!("{m} (recommended)")
            } else {
                (*m).to_string()
            }
        })
        .collect();

    let choice = Select::new()
        .with_prompt("Transcription model")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MODELS[choice].to_string())
}

fn prompt_context_hint() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Context hint for the model (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(if input.trim().is_empty() {
        None
    } else {
        Some(input.trim().to_string())
    })
}

fn validate_audio_file(value: &str) -> std::result::Result<(), String> {
    let path = Path::new(value);
    if !path.is_file() {
        return Err(format!("File not found: {value}"));
    }
    if !scan::has_audio_extension(path) {
        return Err(format!("Not an .mp3 file: {value}"));
    }
    Ok(())
}

fn validate_directory(value: &str) -> std::result::Result<(), String> {
    if Path::new(value).is_dir() {
        Ok(())
    } else {
        Err(format!("Directory not found: {value}"))
    }
}
