//! Pitch representation conversion functions.
//!
//! This module provides deterministic conversion between frequencies in Hertz,
//! scientific pitch notation, MIDI note numbers, and 88-key piano key numbers.

mod constants;
mod convert;
mod parse;


// Re-export all public items to preserve API
pub use constants::{
    A4_FREQ_HZ, A4_KEY_NUMBER, A4_MIDI, DEFAULT_DECIMAL_PLACES, KEY_MAX, KEY_MIN,
    MIDI_TO_KEY_OFFSET, NOTE_NAMES_FROM_A, NOTE_NAMES_FROM_C,
};

pub use convert::{
    frequency_to_midi, frequency_to_pitch_name, key_number_to_pitch_name, midi_to_frequency,
    pitch_name_to_frequency, pitch_name_to_key_number, pitch_name_to_midi,
};
