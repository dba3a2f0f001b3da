//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag. These
//! types enable scripts and other tools to parse CLI output programmatically.

use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input rejected by the conversion library (bad note, bad frequency, out of range)
    pub const INVALID_INPUT: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Output of a single-value conversion command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionOutput {
    /// Whether the conversion succeeded
    pub ok: bool,
    /// Which conversion ran (e.g., "note_to_midi")
    pub conversion: String,
    /// The input value as given on the command line
    pub input: String,
    /// The converted value (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// The error (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl ConversionOutput {
    pub fn success(conversion: &str, input: &str, result: serde_json::Value) -> Self {
        Self {
            ok: true,
            conversion: conversion.to_string(),
            input: input.to_string(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(conversion: &str, input: &str, error: JsonError) -> Self {
        Self {
            ok: false,
            conversion: conversion.to_string(),
            input: input.to_string(),
            result: None,
            error: Some(error),
        }
    }
}

/// Output of the `describe` command: every representation of one pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DescribeOutput {
    /// Canonical pitch name (uppercased, sharps only)
    pub note: String,
    /// Frequency in Hz
    pub frequency_hz: f64,
    /// MIDI note number
    pub midi: i32,
    /// Piano key number, absent when the pitch is off the 88-key keyboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_number: Option<u8>,
}
