//! Scientific pitch notation parsing.

use super::constants::NOTE_NAMES_FROM_C;
use crate::error::PitchError;

/// Parse a pitch name into a C-rooted pitch-class index (0-11) and an octave.
///
/// The octave is the maximal trailing run of an optional '-' followed by
/// decimal digits, so multi-digit ("C10") and negative ("A-1") octaves parse
/// correctly. The letter and accidental are matched case-insensitively.
pub(super) fn parse_pitch_name(input: &str) -> Result<(i32, i32), PitchError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() < 2 || !chars[0].is_ascii_alphabetic() {
        return Err(PitchError::MalformedNote {
            input: input.to_string(),
        });
    }

    let (name, octave_str) = split_octave(&chars);
    if octave_str.is_empty() {
        return Err(PitchError::InvalidOctave {
            input: input.to_string(),
        });
    }
    let octave: i32 = octave_str.parse().map_err(|_| PitchError::InvalidOctave {
        input: input.to_string(),
    })?;

    let name = name.to_uppercase();
    let class_index = NOTE_NAMES_FROM_C
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| PitchError::UnknownPitchClass {
            input: input.to_string(),
            name,
        })?;

    Ok((class_index as i32, octave))
}

/// Split a pitch name into its letter+accidental part and its octave suffix.
///
/// The suffix is the longest trailing digit run, extended by one '-' sign if
/// present and if a non-empty name part remains before it.
fn split_octave(chars: &[char]) -> (String, String) {
    let mut start = chars.len();
    while start > 0 && chars[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start > 1 && start < chars.len() && chars[start - 1] == '-' {
        start -= 1;
    }
    (
        chars[..start].iter().collect(),
        chars[start..].iter().collect(),
    )
}
