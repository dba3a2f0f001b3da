//! CLI command implementations

pub mod describe;
pub mod freq_to_note;
pub mod note_to_freq;
pub mod note_to_key;
pub mod note_to_midi;

pub mod json_output;
