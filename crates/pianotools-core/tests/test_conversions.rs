//! Integration tests for the public conversion surface.

use pretty_assertions::assert_eq;

use pianotools_core::{
    frequency_to_midi, frequency_to_pitch_name, midi_to_frequency, pitch_name_to_frequency,
    pitch_name_to_key_number, pitch_name_to_midi, PitchError, DEFAULT_DECIMAL_PLACES,
};

#[test]
fn test_pitch_name_roundtrip() {
    for name in ["A0", "A4", "C4", "C#4", "G#3", "C8"] {
        let freq = pitch_name_to_frequency(name, DEFAULT_DECIMAL_PLACES).unwrap();
        let back = frequency_to_pitch_name(freq).unwrap();
        assert_eq!(back, name, "roundtrip failed via {} Hz", freq);
    }
}

#[test]
fn test_a4_fixed_points() {
    assert_eq!(
        pitch_name_to_frequency("A4", DEFAULT_DECIMAL_PLACES).unwrap(),
        440.0
    );
    assert_eq!(pitch_name_to_midi("A4").unwrap(), 69);
    assert_eq!(pitch_name_to_key_number("A4").unwrap(), 49);
}

#[test]
fn test_keyboard_boundaries() {
    assert_eq!(pitch_name_to_key_number("A0").unwrap(), 1);
    assert_eq!(pitch_name_to_key_number("C8").unwrap(), 88);
}

#[test]
fn test_frequency_monotonic_in_octave() {
    for class in ["C", "C#", "F", "A", "B"] {
        let mut prev = 0.0;
        for octave in 0..=8 {
            let name = format!("{}{}", class, octave);
            let freq = pitch_name_to_frequency(&name, DEFAULT_DECIMAL_PLACES).unwrap();
            assert!(freq > prev, "{} Hz not above previous octave of {}", freq, name);
            prev = freq;
        }
    }
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        pitch_name_to_midi("4"),
        Err(PitchError::MalformedNote { .. })
    ));
    assert!(matches!(
        pitch_name_to_frequency("H4", DEFAULT_DECIMAL_PLACES),
        Err(PitchError::UnknownPitchClass { .. })
    ));
    assert!(matches!(
        frequency_to_pitch_name(-1.0),
        Err(PitchError::InvalidFrequency { .. })
    ));
    assert!(matches!(
        pitch_name_to_key_number("C9"),
        Err(PitchError::KeyOutOfRange { .. })
    ));
}

#[test]
fn test_midi_frequency_agreement() {
    // midi -> frequency -> midi is the identity over the MIDI range
    for midi in 0..=127 {
        let freq = midi_to_frequency(midi);
        assert_eq!(frequency_to_midi(freq).unwrap(), midi);
    }
}

#[test]
fn test_error_messages_name_the_input() {
    let err = pitch_name_to_frequency("H4", DEFAULT_DECIMAL_PLACES).unwrap_err();
    assert!(err.to_string().contains("H4"));
    let err = frequency_to_pitch_name(-1.0).unwrap_err();
    assert!(err.to_string().contains("-1"));
}
