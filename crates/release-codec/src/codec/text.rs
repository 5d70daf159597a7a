//! Printable-text layer: standard base64 with padding (RFC 4648 §4).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::DecodeError;

/// Encodes bytes as padded standard base64. Total for every input.
pub fn encode_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes padded standard base64.
///
/// Rejects characters outside `[A-Za-z0-9+/=]` (whitespace included),
/// missing or misplaced padding, and non-canonical trailing bits.
pub fn decode_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(text)?)
}
