//! Pianotools CLI - Command-line interface for pitch conversions
//!
//! This binary exposes the pianotools-core conversions as subcommands:
//! note names to frequencies, MIDI numbers, and 88-key piano key numbers,
//! and frequencies back to note names.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use pianotools_cli::commands;

use pianotools_core::DEFAULT_DECIMAL_PLACES;

/// Pianotools - Musical Pitch Representation Conversions
#[derive(Parser)]
#[command(name = "pianotools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a note name to its frequency in Hz
    NoteToFreq {
        /// Note name in scientific pitch notation (e.g. A4, C#3)
        note: String,

        /// Number of decimal digits in the result
        #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
        decimal_places: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a frequency in Hz to the nearest note name
    FreqToNote {
        /// Frequency in Hz (must be positive)
        #[arg(allow_hyphen_values = true)]
        freq: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a note name to its MIDI note number
    NoteToMidi {
        /// Note name in scientific pitch notation (e.g. A4, C#3)
        note: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a note name to its 88-key piano key number (A0 = 1, C8 = 88)
    NoteToKey {
        /// Note name in scientific pitch notation (e.g. A4, C#3)
        note: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print every representation of one pitch
    Describe {
        /// Note name in scientific pitch notation (e.g. A4, C#3)
        note: String,

        /// Number of decimal digits in the printed frequency
        #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
        decimal_places: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::NoteToFreq {
            note,
            decimal_places,
            json,
        } => commands::note_to_freq::run(&note, decimal_places, json),
        Commands::FreqToNote { freq, json } => commands::freq_to_note::run(freq, json),
        Commands::NoteToMidi { note, json } => commands::note_to_midi::run(&note, json),
        Commands::NoteToKey { note, json } => commands::note_to_key::run(&note, json),
        Commands::Describe {
            note,
            decimal_places,
            json,
        } => commands::describe::run(&note, decimal_places, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_note_to_freq() {
        let cli = Cli::try_parse_from(["pianotools", "note-to-freq", "A4"]).unwrap();
        match cli.command {
            Commands::NoteToFreq {
                note,
                decimal_places,
                json,
            } => {
                assert_eq!(note, "A4");
                assert_eq!(decimal_places, 3);
                assert!(!json);
            }
            _ => panic!("expected note-to-freq command"),
        }
    }

    #[test]
    fn test_cli_parses_note_to_freq_with_precision() {
        let cli = Cli::try_parse_from([
            "pianotools",
            "note-to-freq",
            "C#3",
            "--decimal-places",
            "0",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::NoteToFreq {
                note,
                decimal_places,
                json,
            } => {
                assert_eq!(note, "C#3");
                assert_eq!(decimal_places, 0);
                assert!(json);
            }
            _ => panic!("expected note-to-freq command"),
        }
    }

    #[test]
    fn test_cli_parses_freq_to_note_negative() {
        // Negative frequencies must reach the library so it can report the error
        let cli = Cli::try_parse_from(["pianotools", "freq-to-note", "-1"]).unwrap();
        match cli.command {
            Commands::FreqToNote { freq, json } => {
                assert_eq!(freq, -1.0);
                assert!(!json);
            }
            _ => panic!("expected freq-to-note command"),
        }
    }

    #[test]
    fn test_cli_parses_note_to_key() {
        let cli = Cli::try_parse_from(["pianotools", "note-to-key", "C8", "--json"]).unwrap();
        match cli.command {
            Commands::NoteToKey { note, json } => {
                assert_eq!(note, "C8");
                assert!(json);
            }
            _ => panic!("expected note-to-key command"),
        }
    }

    #[test]
    fn test_cli_parses_describe() {
        let cli = Cli::try_parse_from(["pianotools", "describe", "G#3"]).unwrap();
        match cli.command {
            Commands::Describe { note, .. } => assert_eq!(note, "G#3"),
            _ => panic!("expected describe command"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_argument() {
        assert!(Cli::try_parse_from(["pianotools", "note-to-midi"]).is_err());
    }
}
