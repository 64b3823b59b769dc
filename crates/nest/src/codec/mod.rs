//! Binary encoding/decoding for NEST containers.

pub mod container;
pub mod primitives;
pub mod tile;

pub use container::{
    read_container, read_container_from_path, write_container, write_container_to_path,
};
pub use primitives::{Reader, Writer};
pub use tile::{clipped_extent, extract_tile, fill_tile, tile_origins};
