//! Note-to-MIDI command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use pianotools_core::pitch_name_to_midi;

use super::json_output::{error_codes, ConversionOutput, JsonError};

/// Run the note-to-midi command
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
    let midi = pitch_name_to_midi(note)?;
    println!("{} MIDI {}", format!("{}:", note).cyan().bold(), midi);
    Ok(ExitCode::SUCCESS)
}

fn run_json(note: &str) -> Result<ExitCode> {
    let output = match pitch_name_to_midi(note) {
        Ok(midi) => ConversionOutput::success("note_to_midi", note, midi.into()),
        Err(e) => ConversionOutput::failure(
            "note_to_midi",
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
