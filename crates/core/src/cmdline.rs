//! Bounded kernel command-line parsing.
//!
//! `/proc/cmdline` is read once, capped at [`CMDLINE_MAX`] bytes, and the
//! scenario token is extracted with bounds-checked substring search. The
//! parse returns owned values; no buffer outlives the call.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ConfigError;
use crate::mode::ScenarioMode;
use crate::protocol::{CMDLINE_MAX, MODE_KEY};

/// Read at most [`CMDLINE_MAX`] bytes from the command-line source.
///
/// Input past the cap is not read at all. Invalid UTF-8 is replaced rather
/// than rejected; the key and its value are plain ASCII when present.
pub fn read_cmdline(path: impl AsRef<Path>) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(CMDLINE_MAX);
    file.take(CMDLINE_MAX as u64).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Extract the raw `ima_test_mode=` value, if the key is present.
///
/// The value runs from just after the key to the next whitespace or the end
/// of the buffer.
pub fn mode_token(cmdline: &str) -> Option<&str> {
    let start = cmdline.find(MODE_KEY)? + MODE_KEY.len();
    let value = &cmdline[start..];
    let end = value.find(char::is_whitespace).unwrap_or(value.len());
    Some(&value[..end])
}

/// Derive the scenario mode from the command-line source.
pub fn parse(path: impl AsRef<Path>) -> Result<ScenarioMode, ConfigError> {
    let cmdline = read_cmdline(path)?;
    let token = mode_token(&cmdline).ok_or(ConfigError::MissingKey)?;
    token.parse()
}
