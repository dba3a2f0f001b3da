//! Error types for pitch conversion.

use thiserror::Error;

/// Errors raised by the conversion functions.
///
/// Every variant is a flavor of invalid input: the functions themselves have
/// no other failure mode. Errors surface synchronously to the caller; nothing
/// is retried or logged internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    #[error("invalid frequency {frequency} Hz: frequency must be positive and finite")]
    InvalidFrequency { frequency: f64 },
    #[error("invalid note '{input}': expected a letter A-G, an optional '#', and an octave (e.g. \"A4\")")]
    MalformedNote { input: String },
    #[error("unknown pitch class '{name}' in note '{input}' (sharps only, no flats)")]
    UnknownPitchClass { input: String, name: String },
    #[error("invalid octave in note '{input}': expected a decimal integer suffix")]
    InvalidOctave { input: String },
    #[error("key number {key} is outside the 88-key piano range (A0 = 1 .. C8 = 88)")]
    KeyOutOfRange { key: i64 },
}
