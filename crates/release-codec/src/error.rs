//! Error types for release encoding/decoding.

use thiserror::Error;

/// The codec layer an error came from.
///
/// Lets callers tell malformed persisted text apart from a record that
/// does not match the expected schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Base64 printable-text layer.
    Text,
    /// Gzip compression layer.
    Compression,
    /// Delegate schema serializer.
    Schema,
}

impl Stage {
    /// Returns the short stage name used as the error message prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Text => "base64",
            Stage::Compression => "gzip",
            Stage::Schema => "schema",
        }
    }
}

/// Error raised by a [`Schema`](crate::schema::Schema) delegate.
///
/// Protobuf errors are carried unchanged so the caller sees exactly what
/// the serializer reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("protobuf encoding failed: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("protobuf decoding failed: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("{0}")]
    Invalid(String),
}

/// Error while turning printable text back into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("[base64] invalid printable text: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("[gzip] decompression failed: {0}")]
    Decompression(String),

    #[error("[schema] {0}")]
    SchemaDeserialization(#[source] SchemaError),
}

impl DecodeError {
    /// Returns the stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            DecodeError::Base64(_) => Stage::Text,
            DecodeError::Decompression(_) => Stage::Compression,
            DecodeError::SchemaDeserialization(_) => Stage::Schema,
        }
    }

    /// True when the persisted text itself is damaged, as opposed to
    /// carrying a payload the schema rejects.
    pub fn is_malformed_input(&self) -> bool {
        self.stage() != Stage::Schema
    }
}

/// Error while turning a record into printable text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("[schema] {0}")]
    SchemaSerialization(#[source] SchemaError),

    #[error("[gzip] compression failed: {0}")]
    Compression(String),
}

impl EncodeError {
    /// Returns the stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            EncodeError::SchemaSerialization(_) => Stage::Schema,
            EncodeError::Compression(_) => Stage::Compression,
        }
    }
}
