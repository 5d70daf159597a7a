//! Encoder/decoder for persisted release records.
//!
//! A release is stored as printable text:
//!
//! ```text
//! base64_standard( gzip( protobuf(release) ) )
//! ```
//!
//! Releases written before compression was introduced are stored without
//! the gzip layer. The decoder tells the two apart by the gzip magic bytes
//! `1f 8b 08` at the start of the base64-decoded data, so both layouts stay
//! readable. The encoder always compresses.
//!
//! # Quick Start
//!
//! ```rust
//! use release_codec::{decode_release, encode_release, Release};
//!
//! let release = Release {
//!     name: "foo".to_string(),
//!     version: 1,
//!     ..Default::default()
//! };
//!
//! let text = encode_release(&release).unwrap();
//! assert!(text.starts_with("H4sI"));
//!
//! let decoded = decode_release(&text).unwrap();
//! assert_eq!(decoded, release);
//!
//! // Legacy, uncompressed layout.
//! assert_eq!(decode_release("CgNmb28=").unwrap().name, "foo");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Release protobuf messages
//! - [`schema`]: Delegate binary serializer trait and its protobuf implementation
//! - [`codec`]: Base64, gzip and the encode/decode pipeline
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants
//!
//! # Errors
//!
//! Every failure is returned, never logged. Errors report the [`Stage`]
//! that produced them, so damaged text can be told apart from a payload
//! the schema rejects. Decoding is all-or-nothing.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod schema;

// Re-export commonly used types at crate root
pub use codec::{
    EncodeOptions, ReleaseCodec, WireFormat, decode_detailed, decode_release, decode_with,
    encode_release, encode_with,
};
pub use error::{DecodeError, EncodeError, SchemaError, Stage};
pub use limits::MAGIC_GZIP;
pub use model::{Chart, Config, Hook, Info, Release, Status, StatusCode, Timestamp};
pub use schema::{ProtoSchema, ReleaseSchema, Schema};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
