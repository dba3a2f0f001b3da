//! Describe command implementation
//!
//! Prints every representation of one pitch: canonical name, frequency in Hz,
//! MIDI note number, and (when the pitch is on the keyboard) piano key number.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use pianotools_core::{pitch_name_to_frequency, pitch_name_to_key_number, pitch_name_to_midi};

use super::json_output::{error_codes, DescribeOutput, JsonError};

/// Run the describe command
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

fn describe(note: &str, decimal_places: u32) -> Result<DescribeOutput, pianotools_core::PitchError> {
    let midi = pitch_name_to_midi(note)?;
    let frequency_hz = pitch_name_to_frequency(note, decimal_places)?;
    // Off-keyboard pitches have a MIDI number but no key number
    let key_number = pitch_name_to_key_number(note).ok();
    Ok(DescribeOutput {
        note: note.to_uppercase(),
        frequency_hz,
        midi,
        key_number,
    })
}

fn run_human(note: &str, decimal_places: u32) -> Result<ExitCode> {
    let info = describe(note, decimal_places)?;

    println!("{}", info.note.cyan().bold());
    println!("  {} {} Hz", "Frequency:".dimmed(), info.frequency_hz);
    println!("  {} {}", "MIDI:".dimmed(), info.midi);
    match info.key_number {
        Some(key) => println!("  {} {}", "Piano key:".dimmed(), key),
        None => println!("  {} {}", "Piano key:".dimmed(), "off the 88-key keyboard"),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(note: &str, decimal_places: u32) -> Result<ExitCode> {
    match describe(note, decimal_places) {
        Ok(info) => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let err = JsonError::new(error_codes::INVALID_INPUT, e.to_string());
            println!("{}", serde_json::to_string_pretty(&err)?);
            Ok(ExitCode::from(1))
        }
    }
}
