//! Note-to-frequency command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use pianotools_core::pitch_name_to_frequency;

use super::json_output::{error_codes, ConversionOutput, JsonError};

/// Run the note-to-freq command
///
/// # Arguments
/// * `note` - Pitch name in scientific notation (e.g. "A4", "C#3")
/// * `decimal_places` - Decimal digits in the printed frequency
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(note: &str, decimal_places: u32, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(note, decimal_places)
    } else {
        run_human(note, decimal_places)
    }
}

fn run_human(note: &str, decimal_places: u32) -> Result<ExitCode> {
    let frequency = pitch_name_to_frequency(note, decimal_places)?;
    println!("{} {} Hz", format!("{}:", note).cyan().bold(), frequency);
    Ok(ExitCode::SUCCESS)
}

fn run_json(note: &str, decimal_places: u32) -> Result<ExitCode> {
    let output = match pitch_name_to_frequency(note, decimal_places) {
        Ok(frequency) => ConversionOutput::success("note_to_freq", note, frequency.into()),
        Err(e) => ConversionOutput::failure(
            "note_to_freq",
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
