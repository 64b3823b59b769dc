//! Fixed container header.

/// The fixed header of a NEST container.
///
/// On the wire it is 20 bytes: 4 magic bytes, then `version`, `width`,
/// `height`, `tile_size`, and `nested_count`, all little-endian with no
/// padding, serialized field by field. The magic is a format constant
/// ([`crate::limits::MAGIC`]) and is not stored here.
///
/// At encode time the header must agree with the container's actual data;
/// at decode time the header is authoritative and drives allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Format version; this crate writes [`crate::limits::FORMAT_VERSION`].
    ///
    /// The decoder records whatever version it finds and never rejects it;
    /// only bad magic makes a stream not-a-NEST-container.
    pub version: u16,
    /// Main image width in pixels.
    pub width: u32,
    /// Main image height in pixels.
    pub height: u32,
    /// Edge length of a square tile, in pixels.
    pub tile_size: u16,
    /// Number of nested images following the main image.
    pub nested_count: u32,
}
