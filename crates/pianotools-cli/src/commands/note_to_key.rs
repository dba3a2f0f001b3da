//! Note-to-key-number command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use pianotools_core::pitch_name_to_key_number;

use super::json_output::{error_codes, ConversionOutput, JsonError};

/// Run the note-to-key command
///
/// # Arguments
/// * `note` - Pitch name in scientific notation (e.g. "A4", "C#3")
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(note: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(note)
    } else {
        run_human(note)
    }
}

fn run_human(note: &str) -> Result<ExitCode> {
    let key = pitch_name_to_key_number(note)?;
    println!("{} key {}", format!("{}:", note).cyan().bold(), key);
    Ok(ExitCode::SUCCESS)
}

fn run_json(note: &str) -> Result<ExitCode> {
    let output = match pitch_name_to_key_number(note) {
        Ok(key) => ConversionOutput::success("note_to_key", note, key.into()),
        Err(e) => ConversionOutput::failure(
            "note_to_key",
            note,
            JsonError::new(error_codes::INVALID_INPUT, e.to_string()),
        ),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
