//! Tiling transform between the pixel grid and the on-wire tile sequence.
//!
//! Tiles are visited in row-major raster order by origin: the outer loop
//! advances `y` in steps of `tile_size`, the inner loop advances `x`. This
//! traversal order is part of the wire format; encoder and decoder must
//! agree on it exactly, and it cannot change without bumping the format
//! version.
//!
//! A tile at the right or bottom edge of a non-divisible image is clipped:
//! it holds only the valid rows and columns, with no padding, so its byte
//! length depends on its origin. Both directions of the transform compute
//! the same clipped extent.

use crate::model::{PixelGrid, PixelLink};

/// Iterates tile origins over a `width` x `height` image in wire order.
///
/// `tile_size` must be nonzero unless the image is empty; callers validate
/// that before traversal.
pub fn tile_origins(
    width: u32,
    height: u32,
    tile_size: u16,
) -> impl Iterator<Item = (u32, u32)> {
    debug_assert!(tile_size > 0 || width == 0 || height == 0);
    let step = tile_size.max(1) as usize;
    (0..height)
        .step_by(step)
        .flat_map(move |y| (0..width).step_by(step).map(move |x| (x, y)))
}

/// Width and height of the tile at `(origin_x, origin_y)`, clipped to the
/// image bounds.
pub fn clipped_extent(
    width: u32,
    height: u32,
    origin_x: u32,
    origin_y: u32,
    tile_size: u16,
) -> (u32, u32) {
    debug_assert!(origin_x < width && origin_y < height);
    let tile = u32::from(tile_size);
    (tile.min(width - origin_x), tile.min(height - origin_y))
}

/// Copies the tile at `(origin_x, origin_y)` out of the grid: every pixel
/// whose absolute position lies in
/// `[origin_y, origin_y + tile_size) x [origin_x, origin_x + tile_size)`,
/// clipped to the grid, row-major within the tile.
pub fn extract_tile(
    grid: &PixelGrid,
    origin_x: u32,
    origin_y: u32,
    tile_size: u16,
) -> Vec<PixelLink> {
    let (tile_w, tile_h) =
        clipped_extent(grid.width(), grid.height(), origin_x, origin_y, tile_size);
    let mut tile = Vec::with_capacity(tile_w as usize * tile_h as usize);
    for y in origin_y..origin_y + tile_h {
        let row = grid.row(y);
        tile.extend_from_slice(&row[origin_x as usize..(origin_x + tile_w) as usize]);
    }
    tile
}

/// Writes a tile back into the grid at the same clipped positions
/// [`extract_tile`] reads from, in the same order. Never writes outside
/// the grid bounds.
///
/// `tile` must hold exactly the clipped pixel count for this origin.
pub fn fill_tile(
    grid: &mut PixelGrid,
    tile: &[PixelLink],
    origin_x: u32,
    origin_y: u32,
    tile_size: u16,
) {
    let (tile_w, tile_h) =
        clipped_extent(grid.width(), grid.height(), origin_x, origin_y, tile_size);
    debug_assert_eq!(tile.len(), tile_w as usize * tile_h as usize);
    for (dy, chunk) in tile
        .chunks_exact(tile_w as usize)
        .take(tile_h as usize)
        .enumerate()
    {
        let row = grid.row_mut(origin_y + dy as u32);
        row[origin_x as usize..(origin_x + tile_w) as usize].copy_from_slice(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid whose pixels encode their own position, for order-sensitive tests.
    fn position_grid(width: u32, height: u32) -> PixelGrid {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| PixelLink::linked(x as u8, y as u8, 0, 0)))
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn origins_are_row_major() {
        let origins: Vec<_> = tile_origins(5, 3, 2).collect();
        assert_eq!(origins, vec![(0, 0), (2, 0), (4, 0), (0, 2), (2, 2), (4, 2)]);
    }

    #[test]
    fn origins_empty_image() {
        assert_eq!(tile_origins(0, 0, 0).count(), 0);
        assert_eq!(tile_origins(0, 4, 2).count(), 0);
        assert_eq!(tile_origins(4, 0, 2).count(), 0);
    }

    #[test]
    fn extent_is_clipped_at_edges() {
        assert_eq!(clipped_extent(5, 3, 0, 0, 2), (2, 2));
        assert_eq!(clipped_extent(5, 3, 4, 0, 2), (1, 2));
        assert_eq!(clipped_extent(5, 3, 0, 2, 2), (2, 1));
        assert_eq!(clipped_extent(5, 3, 4, 2, 2), (1, 1));
        // Exact division never clips.
        assert_eq!(clipped_extent(4, 4, 2, 2, 2), (2, 2));
    }

    #[test]
    fn clipped_extents_cover_every_pixel_once() {
        for (width, height, tile_size) in [(1024, 768, 256), (1023, 769, 256), (7, 5, 3)] {
            let total: u64 = tile_origins(width, height, tile_size)
                .map(|(x, y)| {
                    let (w, h) = clipped_extent(width, height, x, y, tile_size);
                    u64::from(w) * u64::from(h)
                })
                .sum();
            assert_eq!(total, u64::from(width) * u64::from(height));
        }
    }

    #[test]
    fn extract_is_row_major_within_tile() {
        let grid = position_grid(5, 3);
        let tile = extract_tile(&grid, 2, 0, 2);
        assert_eq!(
            tile,
            vec![
                PixelLink::linked(2, 0, 0, 0),
                PixelLink::linked(3, 0, 0, 0),
                PixelLink::linked(2, 1, 0, 0),
                PixelLink::linked(3, 1, 0, 0),
            ]
        );
    }

    #[test]
    fn edge_tiles_are_shorter() {
        let grid = position_grid(5, 3);
        // Right edge: one column wide.
        assert_eq!(extract_tile(&grid, 4, 0, 2).len(), 2);
        // Bottom-right corner: a single pixel.
        assert_eq!(extract_tile(&grid, 4, 2, 2), vec![PixelLink::linked(4, 2, 0, 0)]);
    }

    #[test]
    fn fill_inverts_extract() {
        let grid = position_grid(5, 3);
        let mut rebuilt = PixelGrid::new(5, 3);
        for (x, y) in tile_origins(5, 3, 2) {
            let tile = extract_tile(&grid, x, y, 2);
            fill_tile(&mut rebuilt, &tile, x, y, 2);
        }
        assert_eq!(grid, rebuilt);
    }

    #[test]
    fn fill_stays_inside_the_clip() {
        let mut grid = position_grid(5, 3);
        let tile = vec![PixelLink::rgb(255, 255, 255); 1];
        fill_tile(&mut grid, &tile, 4, 2, 2);
        assert_eq!(grid.get(4, 2), Some(&PixelLink::rgb(255, 255, 255)));
        // Neighbors untouched.
        assert_eq!(grid.get(3, 2), Some(&PixelLink::linked(3, 2, 0, 0)));
        assert_eq!(grid.get(4, 1), Some(&PixelLink::linked(4, 1, 0, 0)));
    }
}
