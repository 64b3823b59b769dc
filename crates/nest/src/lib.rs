//! NEST: a binary container format for tiled raster images with embedded
//! nested sub-images.
//!
//! A NEST container holds one large main image, cut into fixed-size square
//! tiles for I/O locality, in which any pixel may reference one of several
//! embedded "nested" images (zoom-in detail, alternate content). This
//! crate implements the encode/decode engine: the fixed header, the tiling
//! transform between the row-major pixel grid and the on-wire tile
//! sequence, and the sequential packing of nested image payloads.
//!
//! # Quick Start
//!
//! ```rust
//! use nest::{Container, NestedImage, PixelGrid, PixelLink};
//! use nest::codec::{read_container, write_container};
//!
//! // A 3x2 image where one pixel links to the first nested image.
//! let mut grid = PixelGrid::new(3, 2);
//! *grid.get_mut(0, 0).unwrap() = PixelLink::linked(255, 0, 0, 1);
//! let detail = NestedImage { width: 2, height: 2, data: vec![0; 2 * 2 * 3] };
//! let container = Container::new(grid, 2, vec![detail]);
//!
//! // Encode to bytes, decode back.
//! let mut bytes = Vec::new();
//! write_container(&mut bytes, &container).unwrap();
//! let decoded = read_container(bytes.as_slice()).unwrap();
//! assert_eq!(decoded, container);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Header, PixelLink, PixelGrid, NestedImage,
//!   Container)
//! - [`codec`]: Binary encoding/decoding and the tiling transform
//! - [`validate`]: Structural validation before encoding
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and security limits for decoding
//!
//! # Wire Format
//!
//! All multi-byte integers are little-endian; there is no padding:
//!
//! ```text
//! header          4B "NEST" | 2B version | 4B width | 4B height
//!                 | 2B tile size | 4B nested count
//! main image      tiles in row-major order by origin, each tile the
//!                 clipped count of 7-byte pixel records (R, G, B, u32 link)
//! nested images   each: 2B width | 2B height | width*height*3 raw bytes
//! ```
//!
//! Tiles at the right and bottom edges of a non-divisible image are
//! clipped rather than padded, so both sides of the codec derive each
//! tile's record count from the header dimensions and the tile origin.
//! Encoding and decoding are single forward passes; the byte source/sink
//! is never seeked.
//!
//! # Security
//!
//! The decoder handles untrusted input: allocations driven by header
//! fields are bounded by the constants in [`limits`], truncated streams
//! fail with the position reached, and no partial container is ever
//! returned.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used items at the crate root
pub use codec::{
    read_container, read_container_from_path, write_container, write_container_to_path,
};
pub use error::{Context, DecodeError, EncodeError, ValidationError};
pub use model::{Container, Header, NestedImage, PixelGrid, PixelLink, NO_NESTED_IMAGE};
pub use validate::validate_container;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
