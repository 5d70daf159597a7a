use std::fmt;
use std::io;

use release_codec::{DecodeError, EncodeError, Stage};

pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(INTERNAL, format!("{context}: {err}"))
}

/// Every decode failure means the input was not a readable release.
pub fn decode_error(context: &str, err: DecodeError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn encode_error(context: &str, err: EncodeError) -> CliError {
    match err.stage() {
        Stage::Schema => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        Stage::Text | Stage::Compression => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn json_error(context: &str, err: serde_json::Error) -> CliError {
    if err.is_io() {
        CliError::new(INTERNAL, format!("{context}: {err}"))
    } else {
        CliError::new(DATA_INVALID, format!("{context}: {err}"))
    }
}
