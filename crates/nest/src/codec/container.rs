//! Container encoding/decoding: the NEST wire format proper.
//!
//! Layout (all multi-byte integers little-endian, no padding):
//!
//! ```text
//! header          4B magic | 2B version | 4B width | 4B height
//!                 | 2B tile size | 4B nested count
//! main image      for each tile origin in row-major tile order:
//!                   clipped count x (1B R, 1B G, 1B B, 4B nested index)
//! nested images   nested count x (2B width | 2B height
//!                   | width*height*3 raw RGB bytes)
//! ```
//!
//! Edge tiles of a non-divisible image carry fewer than `tile_size^2`
//! records. The decoder recomputes the clipped count for every tile origin
//! and reads exactly that many records; assuming a fixed `tile_size^2`
//! would misalign the stream on any non-divisible image.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::codec::primitives::{Reader, Writer};
use crate::codec::tile::{clipped_extent, extract_tile, fill_tile, tile_origins};
use crate::error::{Context, DecodeError, EncodeError};
use crate::limits::{
    MAGIC, MAX_GRID_PIXELS, MAX_NESTED_IMAGES, NESTED_BYTES_PER_PIXEL, PIXEL_RECORD_LEN,
};
use crate::model::{Container, Header, NestedImage, PixelGrid, PixelLink};
use crate::validate::validate_container;

// =============================================================================
// ENCODING
// =============================================================================

/// Writes a container to a byte sink.
///
/// The container is validated first; a validation failure leaves the sink
/// untouched. A write failure surfaces as [`EncodeError::Io`] with the
/// position reached, and leaves the sink in an undefined state the caller
/// should discard — there is no partial-success result.
///
/// The sink is not flushed; buffered callers flush after this returns.
pub fn write_container<W: Write>(sink: W, container: &Container) -> Result<(), EncodeError> {
    validate_container(container)?;

    let header = &container.header;
    let mut writer = Writer::new(sink);

    writer.write_bytes(&MAGIC, Context::Field("magic"))?;
    writer.write_u16(header.version, Context::Field("version"))?;
    writer.write_u32(header.width, Context::Field("width"))?;
    writer.write_u32(header.height, Context::Field("height"))?;
    writer.write_u16(header.tile_size, Context::Field("tile size"))?;
    writer.write_u32(header.nested_count, Context::Field("nested count"))?;

    let grid = &container.main_image;
    let mut record_buf = Vec::new();
    for (x, y) in tile_origins(header.width, header.height, header.tile_size) {
        let tile = extract_tile(grid, x, y, header.tile_size);
        record_buf.clear();
        record_buf.reserve(tile.len() * PIXEL_RECORD_LEN);
        for pixel in &tile {
            record_buf.push(pixel.r);
            record_buf.push(pixel.g);
            record_buf.push(pixel.b);
            record_buf.extend_from_slice(&pixel.nested_index.to_le_bytes());
        }
        writer.write_bytes(&record_buf, Context::Tile { x, y })?;
    }

    for (index, nested) in container.nested_images.iter().enumerate() {
        let context = Context::NestedImage {
            index: index as u32,
        };
        writer.write_u16(nested.width, context)?;
        writer.write_u16(nested.height, context)?;
        writer.write_bytes(&nested.data, context)?;
    }

    Ok(())
}

/// Writes a container to the file at `path`.
///
/// Creates (or truncates) the file, writes through a buffer, and flushes;
/// the handle is released when this returns.
pub fn write_container_to_path<P: AsRef<Path>>(
    path: P,
    container: &Container,
) -> Result<(), EncodeError> {
    // Validate up front so an unencodable container never truncates an
    // existing file.
    validate_container(container)?;

    let file = File::create(path).map_err(|source| EncodeError::Io {
        context: Context::File,
        source,
    })?;
    let mut sink = BufWriter::new(file);
    write_container(&mut sink, container)?;
    sink.flush().map_err(|source| EncodeError::Io {
        context: Context::File,
        source,
    })
}

// =============================================================================
// DECODING
// =============================================================================

/// Reads a container from a byte source.
///
/// The header is authoritative: it drives grid allocation and the nested
/// image count. The version field is recorded in the returned header but
/// never rejected; only bad magic makes a stream not-a-NEST-container.
/// Pixel links are not bound-checked on the way in — decoders tolerate
/// what encoders reject.
///
/// Any failure returns immediately with positional context; a truncated
/// stream never yields a partially valid container.
pub fn read_container<R: Read>(source: R) -> Result<Container, DecodeError> {
    let mut reader = Reader::new(source);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic, Context::Field("magic"))?;
    if magic != MAGIC {
        return Err(DecodeError::InvalidMagic { found: magic });
    }

    let version = reader.read_u16(Context::Field("version"))?;
    let width = reader.read_u32(Context::Field("width"))?;
    let height = reader.read_u32(Context::Field("height"))?;
    let tile_size = reader.read_u16(Context::Field("tile size"))?;
    let nested_count = reader.read_u32(Context::Field("nested count"))?;

    let pixel_count = u64::from(width) * u64::from(height);
    if tile_size == 0 && pixel_count != 0 {
        return Err(DecodeError::ZeroTileSize { width, height });
    }
    if pixel_count > MAX_GRID_PIXELS {
        return Err(DecodeError::LengthExceedsLimit {
            field: "main image pixel count",
            len: pixel_count,
            max: MAX_GRID_PIXELS,
        });
    }
    if nested_count > MAX_NESTED_IMAGES {
        return Err(DecodeError::LengthExceedsLimit {
            field: "nested count",
            len: u64::from(nested_count),
            max: u64::from(MAX_NESTED_IMAGES),
        });
    }

    let mut grid = PixelGrid::new(width, height);
    let mut record_buf = Vec::new();
    let mut tile = Vec::new();
    for (x, y) in tile_origins(width, height, tile_size) {
        let context = Context::Tile { x, y };
        let (tile_w, tile_h) = clipped_extent(width, height, x, y, tile_size);
        let count = tile_w as usize * tile_h as usize;

        record_buf.resize(count * PIXEL_RECORD_LEN, 0);
        reader.read_exact(&mut record_buf, context)?;

        tile.clear();
        tile.reserve(count);
        for record in record_buf.chunks_exact(PIXEL_RECORD_LEN) {
            let nested_index = u32::from_le_bytes([record[3], record[4], record[5], record[6]]);
            tile.push(PixelLink {
                r: record[0],
                g: record[1],
                b: record[2],
                nested_index,
            });
        }
        fill_tile(&mut grid, &tile, x, y, tile_size);
    }

    let mut nested_images = Vec::with_capacity(nested_count as usize);
    for index in 0..nested_count {
        let context = Context::NestedImage { index };
        let nested_width = reader.read_u16(context)?;
        let nested_height = reader.read_u16(context)?;
        let len = nested_width as usize * nested_height as usize * NESTED_BYTES_PER_PIXEL;
        let mut data = vec![0u8; len];
        reader.read_exact(&mut data, context)?;
        nested_images.push(NestedImage {
            width: nested_width,
            height: nested_height,
            data,
        });
    }

    let header = Header {
        version,
        width,
        height,
        tile_size,
        nested_count,
    };
    Ok(Container {
        header,
        main_image: grid,
        nested_images,
    })
}

/// Reads a container from the file at `path`.
///
/// Opens the file, reads through a buffer; the handle is released when
/// this returns.
pub fn read_container_from_path<P: AsRef<Path>>(path: P) -> Result<Container, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Io {
        context: Context::File,
        source,
    })?;
    read_container(BufReader::new(file))
}
