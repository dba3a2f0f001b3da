//! Frequency-to-note command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use pianotools_core::frequency_to_pitch_name;

use super::json_output::{error_codes, ConversionOutput, JsonError};

/// Run the freq-to-note command
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(frequency: f64, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(frequency)
    } else {
        run_human(frequency)
    }
}

fn run_human(frequency: f64) -> Result<ExitCode> {
    let note = frequency_to_pitch_name(frequency)?;
    println!("{} {}", format!("{} Hz:", frequency).cyan().bold(), note);
    Ok(ExitCode::SUCCESS)
}

fn run_json(frequency: f64) -> Result<ExitCode> {
    let input = frequency.to_string();
    let output = match frequency_to_pitch_name(frequency) {
        Ok(note) => ConversionOutput::success("freq_to_note", &input, note.into()),
        Err(e) => ConversionOutput::failure(
            "freq_to_note",
            &input,
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
