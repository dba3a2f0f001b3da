//! Pianotools CLI library.
//!
//! This crate provides the command implementations for the pianotools CLI,
//! one module per subcommand plus the shared JSON output types.

pub mod commands;
