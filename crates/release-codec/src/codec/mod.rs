//! Layered codec between records and persisted printable text.
//!
//! Leaves first: [`gzip`] (compression and format detection), [`text`]
//! (base64), then [`release`] which composes them around a schema.

pub mod gzip;
pub mod release;
pub mod text;

pub use gzip::{WireFormat, compress, decompress, detect_format, is_compressed};
pub use release::{
    EncodeOptions, ReleaseCodec, decode_detailed, decode_release, decode_with, encode_release,
    encode_with,
};
pub use text::{decode_text, encode_text};
