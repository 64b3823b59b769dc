//! Error types for NEST encoding, decoding, and validation.

use std::fmt;
use std::io;

use thiserror::Error;

/// Position in the byte stream an I/O failure is attributed to.
///
/// Every read and write in the codec names the header field, tile origin,
/// or nested image it was working on, so a truncated or failing stream can
/// be diagnosed without a hex dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// A fixed header field.
    Field(&'static str),
    /// The tile whose origin is `(x, y)` in pixel coordinates.
    Tile { x: u32, y: u32 },
    /// The nested image at this position in the sequence.
    NestedImage { index: u32 },
    /// The underlying file of a path-based call.
    File,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Field(name) => write!(f, "header field `{name}`"),
            Context::Tile { x, y } => write!(f, "tile ({x}, {y})"),
            Context::NestedImage { index } => write!(f, "nested image {index}"),
            Context::File => write!(f, "container file"),
        }
    }
}

/// Error during structural validation of a container before encoding.
///
/// Validation runs before the first byte reaches the sink: a container
/// that fails it leaves the sink untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("main image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("tile size must be nonzero")]
    ZeroTileSize,

    #[error(
        "header declares a {declared_width}x{declared_height} image but the grid is {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        declared_width: u32,
        declared_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("header declares {declared} nested images but the container holds {actual}")]
    NestedCountMismatch { declared: u32, actual: usize },

    #[error(
        "nested image {index} is {width}x{height} and needs {expected} payload bytes, found {actual}"
    )]
    NestedPayloadSizeMismatch {
        index: usize,
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },

    #[error("pixel ({x}, {y}) links to nested image {index} but only {count} exist")]
    NestedIndexOutOfRange { x: u32, y: u32, index: u32, count: u32 },

    #[error("a {width}x{height} grid needs {expected} pixels, found {actual}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Error during binary decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream is not a NEST container, whatever its version claims.
    #[error("invalid magic bytes: expected \"NEST\", found {found:?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: Context },

    #[error("read failed at {context}")]
    Io {
        context: Context,
        #[source]
        source: io::Error,
    },

    /// A non-empty image cannot be traversed with a zero tile size.
    #[error("tile size is zero for a {width}x{height} image")]
    ZeroTileSize { width: u32, height: u32 },

    #[error("{field} {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: u64,
        max: u64,
    },
}

/// Error during binary encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The container failed structural validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("write failed at {context}")]
    Io {
        context: Context,
        #[source]
        source: io::Error,
    },
}
