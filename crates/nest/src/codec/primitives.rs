//! Stream primitives for the NEST wire format.
//!
//! Thin wrappers over [`io::Read`]/[`io::Write`] that move little-endian
//! scalars and raw byte runs, attributing every failure to a position in
//! the container ([`Context`]). The stream is treated as strictly
//! sequential; nothing here seeks.

use std::io::{self, Read, Write};

use crate::error::{Context, DecodeError, EncodeError};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding a NEST byte source.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
}

impl<R: Read> Reader<R> {
    /// Creates a new reader over a byte source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Fills `buf` from the source.
    ///
    /// A stream that ends early yields [`DecodeError::UnexpectedEof`]; any
    /// other failure is surfaced as [`DecodeError::Io`], both carrying
    /// `context`.
    pub fn read_exact(&mut self, buf: &mut [u8], context: Context) -> Result<(), DecodeError> {
        self.inner.read_exact(buf).map_err(|source| {
            if source.kind() == io::ErrorKind::UnexpectedEof {
                DecodeError::UnexpectedEof { context }
            } else {
                DecodeError::Io { context, source }
            }
        })
    }

    /// Reads a little-endian u16.
    pub fn read_u16(&mut self, context: Context) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf, context)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Reads a little-endian u32.
    pub fn read_u32(&mut self, context: Context) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf, context)?;
        Ok(u32::from_le_bytes(buf))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding to a NEST byte sink.
///
/// The sink is never flushed here; callers that buffer flush after the
/// whole container is written.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
}

impl<W: Write> Writer<W> {
    /// Creates a new writer over a byte sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8], context: Context) -> Result<(), EncodeError> {
        self.inner
            .write_all(bytes)
            .map_err(|source| EncodeError::Io { context, source })
    }

    /// Writes a little-endian u16.
    pub fn write_u16(&mut self, value: u16, context: Context) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes(), context)
    }

    /// Writes a little-endian u32.
    pub fn write_u32(&mut self, value: u32, context: Context) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes(), context)
    }
}
