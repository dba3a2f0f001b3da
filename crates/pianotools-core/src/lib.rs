//! Pianotools Core - Pitch Representation Conversions
//!
//! This crate converts among four representations of a musical pitch in
//! 12-tone equal temperament referenced to A4 = 440 Hz:
//!
//! - **Frequency** in Hertz (positive `f64`)
//! - **Scientific pitch notation** strings like `"A4"` or `"C#3"` (sharps only)
//! - **MIDI note number** (A4 = 69)
//! - **Piano key number** (1-88 on a standard 88-key piano; A0 = 1, C8 = 88)
//!
//! Every conversion is a pure function over constant lookup tables: no state,
//! no I/O, no allocation beyond the returned `String`. All functions are safe
//! to call concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use pianotools_core::{
//!     frequency_to_pitch_name, pitch_name_to_frequency, pitch_name_to_midi,
//!     pitch_name_to_key_number, DEFAULT_DECIMAL_PLACES,
//! };
//!
//! assert_eq!(frequency_to_pitch_name(440.0).unwrap(), "A4");
//! assert_eq!(pitch_name_to_frequency("A4", DEFAULT_DECIMAL_PLACES).unwrap(), 440.0);
//! assert_eq!(pitch_name_to_midi("A4").unwrap(), 69);
//! assert_eq!(pitch_name_to_key_number("A4").unwrap(), 49);
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: the conversion functions and their constant tables
//! - [`error`]: the [`PitchError`] input-validation error type

pub mod error;
pub mod note;

pub use error::PitchError;
pub use note::{
    frequency_to_midi, frequency_to_pitch_name, key_number_to_pitch_name, midi_to_frequency,
    pitch_name_to_frequency, pitch_name_to_key_number, pitch_name_to_midi, A4_FREQ_HZ, A4_KEY_NUMBER,
    A4_MIDI, DEFAULT_DECIMAL_PLACES, KEY_MAX, KEY_MIN,
};

/// Crate version for tool identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
