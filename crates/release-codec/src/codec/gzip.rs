//! Gzip layer and compression detection.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::error::{DecodeError, EncodeError};
use crate::limits::{BEST_COMPRESSION, MAGIC_GZIP};

/// Historical layout of a decoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Gzip-compressed binary payload (current writer).
    Gzip,
    /// Bare binary payload, written before compression was introduced.
    Legacy,
}

/// Returns true if `bytes` starts with the gzip magic marker.
///
/// Inputs shorter than the marker never match.
#[inline]
pub fn is_compressed(bytes: &[u8]) -> bool {
    bytes.starts_with(MAGIC_GZIP)
}

/// Classifies base64-decoded bytes by their leading marker.
///
/// A legacy payload that happens to begin with the marker is classified
/// as [`WireFormat::Gzip`] and will fail decompression.
pub fn detect_format(bytes: &[u8]) -> WireFormat {
    if is_compressed(bytes) {
        WireFormat::Gzip
    } else {
        WireFormat::Legacy
    }
}

/// Compresses `data` into a single gzip member.
///
/// Levels above [`BEST_COMPRESSION`] are clamped.
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>, EncodeError> {
    let level = Compression::new(level.min(BEST_COMPRESSION));
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), level);
    encoder
        .write_all(data)
        .map_err(|e| EncodeError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| EncodeError::Compression(e.to_string()))
}

/// Decompresses a gzip stream to the end.
///
/// Concatenated members are joined. A truncated stream, a bad header, a
/// corrupt deflate block or a checksum mismatch is an error.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = MultiGzDecoder::new(compressed);
    let mut decompressed = Vec::with_capacity(compressed.len().saturating_mul(4));
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::Decompression(e.to_string()))?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::NO_COMPRESSION;

    #[test]
    fn test_compress_writes_magic() {
        let compressed = compress(b"hello release", BEST_COMPRESSION).unwrap();
        assert_eq!(&compressed[0..3], MAGIC_GZIP);
        assert!(is_compressed(&compressed));
    }

    #[test]
    fn test_compress_roundtrip_all_levels() {
        let data = b"apiVersion: v1\nkind: ConfigMap\n".repeat(20);
        for level in NO_COMPRESSION..=BEST_COMPRESSION {
            let compressed = compress(&data, level).unwrap();
            assert_eq!(detect_format(&compressed), WireFormat::Gzip, "level {}", level);
            assert_eq!(decompress(&compressed).unwrap(), data, "level {}", level);
        }
    }

    #[test]
    fn test_level_is_clamped() {
        let data = b"clamp me".repeat(10);
        assert_eq!(compress(&data, 42).unwrap(), compress(&data, BEST_COMPRESSION).unwrap());
    }

    #[test]
    fn test_empty_input_compresses() {
        let compressed = compress(b"", BEST_COMPRESSION).unwrap();
        assert!(is_compressed(&compressed));
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_detect_short_inputs_are_legacy() {
        assert_eq!(detect_format(&[]), WireFormat::Legacy);
        assert_eq!(detect_format(&[0x1f]), WireFormat::Legacy);
        assert_eq!(detect_format(&[0x1f, 0x8b]), WireFormat::Legacy);
        assert_eq!(detect_format(&[0x1f, 0x8b, 0x08]), WireFormat::Gzip);
    }

    #[test]
    fn test_detect_requires_deflate_method_byte() {
        assert_eq!(detect_format(&[0x1f, 0x8b, 0x09, 0x00]), WireFormat::Legacy);
        assert_eq!(detect_format(&[0x0a, 0x1f, 0x8b, 0x08]), WireFormat::Legacy);
    }

    #[test]
    fn test_truncated_stream_fails() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(8);
        let compressed = compress(&data, BEST_COMPRESSION).unwrap();

        let truncated = &compressed[..compressed.len() / 2];
        assert!(matches!(decompress(truncated), Err(DecodeError::Decompression(_))));

        // Missing the CRC32/ISIZE trailer.
        let no_trailer = &compressed[..compressed.len() - 8];
        assert!(matches!(decompress(no_trailer), Err(DecodeError::Decompression(_))));
    }

    #[test]
    fn test_checksum_mismatch_fails() {
        let compressed = compress(b"checksummed payload", BEST_COMPRESSION).unwrap();
        let mut corrupt = compressed.clone();
        let crc_pos = corrupt.len() - 8;
        corrupt[crc_pos] ^= 0xff;
        assert!(matches!(decompress(&corrupt), Err(DecodeError::Decompression(_))));
    }

    #[test]
    fn test_trailing_garbage_after_member_fails() {
        let mut stream = compress(b"payload", BEST_COMPRESSION).unwrap();
        stream.extend_from_slice(b"garbage");
        assert!(matches!(decompress(&stream), Err(DecodeError::Decompression(_))));
    }

    #[test]
    fn test_concatenated_members_are_joined() {
        let mut stream = compress(b"first,", BEST_COMPRESSION).unwrap();
        stream.extend(compress(b"second", BEST_COMPRESSION).unwrap());
        assert_eq!(decompress(&stream).unwrap(), b"first,second");
    }
}
