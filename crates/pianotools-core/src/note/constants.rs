//! Constants for pitch representation conversions.

/// Reference tuning frequency (A4, concert pitch).
pub const A4_FREQ_HZ: f64 = 440.0;

/// MIDI note number of A4.
pub const A4_MIDI: i32 = 69;

/// Piano key number of A4 on an 88-key keyboard.
pub const A4_KEY_NUMBER: i32 = 49;

/// Offset between a MIDI note number and its piano key number
/// (A0 is MIDI 21 and key 1, so key = midi - 20).
pub const MIDI_TO_KEY_OFFSET: i32 = 20;

/// First physical key on an 88-key piano (A0).
pub const KEY_MIN: u8 = 1;

/// Last physical key on an 88-key piano (C8).
pub const KEY_MAX: u8 = 88;

/// Default number of decimal digits for computed frequencies.
pub const DEFAULT_DECIMAL_PLACES: u32 = 3;

/// Pitch-class names in key-number order, rooted at A.
///
/// Key numbers count from A0 = 1, so `(key - 1) mod 12` indexes this table.
pub const NOTE_NAMES_FROM_A: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Pitch-class names in MIDI order, rooted at C.
///
/// MIDI numbers count pitch classes from C, so `midi mod 12` indexes this
/// table. Lookup position doubles as the C-rooted pitch-class index.
pub const NOTE_NAMES_FROM_C: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Position of A in [`NOTE_NAMES_FROM_C`]. The semitone offset of a pitch
/// class from A is its C-rooted index minus this.
pub(super) const A_INDEX_FROM_C: i32 = 9;
