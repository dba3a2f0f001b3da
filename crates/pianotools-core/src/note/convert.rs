//! Conversions between frequency, pitch name, MIDI number, and piano key number.

use super::constants::{
    A4_FREQ_HZ, A4_KEY_NUMBER, A4_MIDI, A_INDEX_FROM_C, KEY_MAX, MIDI_TO_KEY_OFFSET,
    NOTE_NAMES_FROM_A,
};
use super::parse::parse_pitch_name;
use crate::error::PitchError;

/// Convert a frequency in Hz to the name of the nearest equal-tempered pitch.
///
/// Uses the 88-key numbering: `key = round(12 * log2(f / 440) + 49)` where
/// key 49 is A4. Frequencies exactly between two semitones round half to even.
///
/// # Arguments
/// * `frequency` - Frequency in Hz (must be positive and finite)
///
/// # Returns
/// Pitch name in scientific notation, sharps only (e.g. "A4", "C#3")
///
/// # Examples
/// ```
/// use pianotools_core::frequency_to_pitch_name;
///
/// assert_eq!(frequency_to_pitch_name(440.0).unwrap(), "A4");
/// assert_eq!(frequency_to_pitch_name(261.626).unwrap(), "C4");
/// ```
pub fn frequency_to_pitch_name(frequency: f64) -> Result<String, PitchError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(PitchError::InvalidFrequency { frequency });
    }
    let key = (12.0 * (frequency / A4_FREQ_HZ).log2() + A4_KEY_NUMBER as f64).round_ties_even();
    Ok(key_to_name(key as i64))
}

/// Convert a pitch name to its frequency in Hz, rounded to `decimal_places`
/// decimal digits.
///
/// The reference is A4 = 440 Hz; each semitone is a factor of 2^(1/12).
/// [`DEFAULT_DECIMAL_PLACES`](super::DEFAULT_DECIMAL_PLACES) (3) is the
/// conventional precision.
///
/// # Arguments
/// * `pitch` - Pitch name (e.g. "A4", "C#3", case-insensitive, sharps only)
/// * `decimal_places` - Number of decimal digits in the result
///
/// # Examples
/// ```
/// use pianotools_core::pitch_name_to_frequency;
///
/// assert_eq!(pitch_name_to_frequency("A4", 3).unwrap(), 440.0);
/// assert_eq!(pitch_name_to_frequency("C4", 3).unwrap(), 261.626);
/// ```
pub fn pitch_name_to_frequency(pitch: &str, decimal_places: u32) -> Result<f64, PitchError> {
    let (class_index, octave) = parse_pitch_name(pitch)?;
    // i64 arithmetic: octaves near i32::MAX are parseable and must not overflow
    let semitones_from_a4 = (class_index - A_INDEX_FROM_C) as i64 + (octave as i64 - 4) * 12;
    let frequency = A4_FREQ_HZ * 2.0_f64.powf(semitones_from_a4 as f64 / 12.0);
    Ok(round_to_places(frequency, decimal_places))
}

/// Convert a pitch name to its MIDI note number.
///
/// MIDI counts pitch classes from C with C-1 = 0, so
/// `midi = class + (octave + 1) * 12` and A4 = 69. The result is not
/// range-checked: octaves outside the MIDI range produce numbers outside
/// 0-127. Octaves whose MIDI number does not fit an `i32` fail with
/// [`PitchError::InvalidOctave`].
///
/// # Examples
/// ```
/// use pianotools_core::pitch_name_to_midi;
///
/// assert_eq!(pitch_name_to_midi("A4").unwrap(), 69);
/// assert_eq!(pitch_name_to_midi("C4").unwrap(), 60);
/// ```
pub fn pitch_name_to_midi(pitch: &str) -> Result<i32, PitchError> {
    let (class_index, octave) = parse_pitch_name(pitch)?;
    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|o| o.checked_add(class_index))
        .ok_or_else(|| PitchError::InvalidOctave {
            input: pitch.to_string(),
        })
}

/// Convert a pitch name to its 88-key piano key number (A0 = 1, C8 = 88).
///
/// Derived as `midi - 20`. Unlike [`pitch_name_to_midi`], the result is
/// bound-checked: pitches that resolve below key 0 or above key 88 fail with
/// [`PitchError::KeyOutOfRange`].
///
/// # Examples
/// ```
/// use pianotools_core::pitch_name_to_key_number;
///
/// assert_eq!(pitch_name_to_key_number("A0").unwrap(), 1);
/// assert_eq!(pitch_name_to_key_number("C8").unwrap(), 88);
/// assert!(pitch_name_to_key_number("C9").is_err());
/// ```
pub fn pitch_name_to_key_number(pitch: &str) -> Result<u8, PitchError> {
    let key = i64::from(pitch_name_to_midi(pitch)?) - i64::from(MIDI_TO_KEY_OFFSET);
    if key < 0 || key > i64::from(KEY_MAX) {
        return Err(PitchError::KeyOutOfRange { key });
    }
    Ok(key as u8)
}

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12) where 69 is A4.
///
/// # Examples
/// ```
/// use pianotools_core::midi_to_frequency;
///
/// assert!((midi_to_frequency(69) - 440.0).abs() < 0.001);
/// assert!((midi_to_frequency(60) - 261.626).abs() < 0.01);
/// ```
pub fn midi_to_frequency(midi: i32) -> f64 {
    A4_FREQ_HZ * 2.0_f64.powf((midi - A4_MIDI) as f64 / 12.0)
}

/// Convert a frequency in Hz to the nearest MIDI note number.
///
/// Same input check (positive and finite) and half-to-even tie-break as
/// [`frequency_to_pitch_name`]; the result is not clamped to 0-127.
///
/// # Examples
/// ```
/// use pianotools_core::frequency_to_midi;
///
/// assert_eq!(frequency_to_midi(440.0).unwrap(), 69);
/// assert_eq!(frequency_to_midi(261.626).unwrap(), 60);
/// ```
pub fn frequency_to_midi(frequency: f64) -> Result<i32, PitchError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(PitchError::InvalidFrequency { frequency });
    }
    let midi = A4_MIDI as f64 + 12.0 * (frequency / A4_FREQ_HZ).log2();
    Ok(midi.round_ties_even() as i32)
}

/// Convert an 88-key piano key number back to its pitch name.
///
/// Inverse of [`pitch_name_to_key_number`], with the same [0, 88] bound
/// (key 0 is G#0, one semitone below the keyboard).
///
/// # Examples
/// ```
/// use pianotools_core::key_number_to_pitch_name;
///
/// assert_eq!(key_number_to_pitch_name(1).unwrap(), "A0");
/// assert_eq!(key_number_to_pitch_name(88).unwrap(), "C8");
/// ```
pub fn key_number_to_pitch_name(key: u8) -> Result<String, PitchError> {
    if key > KEY_MAX {
        return Err(PitchError::KeyOutOfRange { key: key.into() });
    }
    Ok(key_to_name(key as i64))
}

/// Format a key number as a pitch name using the A-rooted table.
///
/// The pitch class cycles from A (key 1 = A0) while the scientific octave
/// number increments at C, hence the +8 shift. Euclidean div/mod keep
/// sub-keyboard keys (key <= 0) on the same grid.
fn key_to_name(key: i64) -> String {
    let class_index = (key - 1).rem_euclid(12) as usize;
    let octave = (key + 8).div_euclid(12);
    format!("{}{}", NOTE_NAMES_FROM_A[class_index], octave)
}

/// Round a value to `places` decimal digits, half away from zero.
///
/// Past `f64` precision the value is returned unchanged; the factor would
/// otherwise overflow (and `places as i32` would wrap for huge inputs).
fn round_to_places(value: f64, places: u32) -> f64 {
    if places > f64::DIGITS {
        return value;
    }
    let factor = 10.0_f64.powi(places as i32);
    (value * factor).round() / factor
}
