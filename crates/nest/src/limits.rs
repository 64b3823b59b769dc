//! Wire constants and security limits for decoding.
//!
//! The decoder is designed to handle untrusted input: every allocation
//! driven by a header field is checked against a limit here before it
//! happens.

/// Magic bytes at the start of every NEST container.
pub const MAGIC: [u8; 4] = *b"NEST";

/// Format version written by this crate.
pub const FORMAT_VERSION: u16 = 1;

/// Fixed header length in bytes:
/// magic + version + width + height + tile size + nested count.
pub const HEADER_LEN: usize = 20;

/// Wire size of one pixel record: R, G, B, then a little-endian u32
/// nested index. No padding.
pub const PIXEL_RECORD_LEN: usize = 7;

/// Bytes per pixel in a nested image payload (raw RGB).
pub const NESTED_BYTES_PER_PIXEL: usize = 3;

/// Maximum `width * height` a decoded main image may declare.
///
/// 2^28 pixels is a 16384 x 16384 grid, far beyond any realistic
/// container; the cap only stops a corrupt header from demanding an
/// absurd allocation.
pub const MAX_GRID_PIXELS: u64 = 1 << 28;

/// Maximum number of nested images a decoded container may declare.
pub const MAX_NESTED_IMAGES: u32 = 1 << 16;
