//! Wire-format constants.

/// Leading bytes of a gzip member using the deflate method (RFC 1952).
///
/// Persisted text whose decoded bytes start with this marker is treated as
/// compressed; anything else is a legacy uncompressed payload.
pub const MAGIC_GZIP: &[u8; 3] = &[0x1f, 0x8b, 0x08];

/// Highest gzip compression level.
pub const BEST_COMPRESSION: u32 = 9;

/// Lowest gzip compression level (stored blocks, still framed as gzip).
pub const NO_COMPRESSION: u32 = 0;
