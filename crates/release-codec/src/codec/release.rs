//! Record encoding/decoding to and from persisted printable text.
//!
//! ```text
//! text = base64(gzip(serialize(record)))
//! ```
//!
//! The decoder also accepts `base64(serialize(record))`, the layout written
//! before compression was introduced.

use crate::codec::gzip::{WireFormat, compress, decompress, detect_format};
use crate::codec::text::{decode_text, encode_text};
use crate::error::{DecodeError, EncodeError};
use crate::limits::BEST_COMPRESSION;
use crate::model::Release;
use crate::schema::{ReleaseSchema, Schema};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes persisted text into a record.
pub fn decode_with<S: Schema>(schema: &S, text: &str) -> Result<S::Record, DecodeError> {
    decode_detailed(schema, text).map(|(record, _)| record)
}

/// Decodes persisted text and reports which wire format it used.
///
/// The path is strictly linear: base64, then gzip only when the decoded
/// bytes start with the gzip marker, then the schema. Any failure returns
/// no record.
pub fn decode_detailed<S: Schema>(
    schema: &S,
    text: &str,
) -> Result<(S::Record, WireFormat), DecodeError> {
    let bytes = decode_text(text)?;

    let format = detect_format(&bytes);
    let payload = match format {
        WireFormat::Gzip => decompress(&bytes)?,
        WireFormat::Legacy => bytes,
    };

    let record = schema
        .deserialize(&payload)
        .map_err(DecodeError::SchemaDeserialization)?;
    Ok((record, format))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Options for encoding records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Gzip level, `0..=9`.
    ///
    /// Defaults to best compression. Level 0 still emits a gzip stream, so
    /// there is no way to write the legacy uncompressed layout.
    pub compression_level: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compression_level: BEST_COMPRESSION,
        }
    }
}

impl EncodeOptions {
    /// Creates default (best compression) encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gzip level, clamped to `0..=9`.
    pub fn with_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(BEST_COMPRESSION);
        self
    }
}

/// Encodes a record into persisted text.
pub fn encode_with<S: Schema>(
    schema: &S,
    record: &S::Record,
    options: EncodeOptions,
) -> Result<String, EncodeError> {
    let payload = schema
        .serialize(record)
        .map_err(EncodeError::SchemaSerialization)?;
    let compressed = compress(&payload, options.compression_level)?;
    Ok(encode_text(&compressed))
}

// =============================================================================
// CODEC
// =============================================================================

/// Stateless encoder/decoder bound to one schema.
///
/// Holds no per-call state; a single instance can be shared between
/// threads and reused indefinitely.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCodec<S = ReleaseSchema> {
    schema: S,
    options: EncodeOptions,
}

impl<S: Schema> ReleaseCodec<S> {
    /// Creates a codec for `schema` with default options.
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            options: EncodeOptions::default(),
        }
    }

    /// Replaces the encoding options.
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Encodes a record into persisted text.
    pub fn encode(&self, record: &S::Record) -> Result<String, EncodeError> {
        encode_with(&self.schema, record, self.options)
    }

    /// Decodes persisted text into a record.
    pub fn decode(&self, text: &str) -> Result<S::Record, DecodeError> {
        decode_with(&self.schema, text)
    }

    /// Decodes persisted text and reports the wire format it used.
    pub fn decode_detailed(&self, text: &str) -> Result<(S::Record, WireFormat), DecodeError> {
        decode_detailed(&self.schema, text)
    }
}

/// Encodes a release as base64 of its gzipped protobuf encoding.
pub fn encode_release(release: &Release) -> Result<String, EncodeError> {
    encode_with(&ReleaseSchema::new(), release, EncodeOptions::default())
}

/// Decodes a release from persisted text, compressed or legacy.
pub fn decode_release(text: &str) -> Result<Release, DecodeError> {
    decode_with(&ReleaseSchema::new(), text)
}
