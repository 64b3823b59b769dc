//! Seeded sample-data generation for NEST containers.
//!
//! Test and demo data for the `nest` codec. Everything is driven by an
//! explicit seed so generated containers are reproducible across runs;
//! nothing here reads the clock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nest::{Container, NestedImage, PixelGrid, PixelLink};

/// Nested image edge lengths are drawn from this range.
const NESTED_EDGE_RANGE: std::ops::Range<u16> = 50..150;

/// Generates a valid container with uniformly random pixels and payloads.
///
/// Pixel links are drawn from `0..=nested_count`, so with `n` nested
/// images roughly one pixel in `n + 1` is unlinked. The same seed always
/// yields the same container.
pub fn sample_container(
    seed: u64,
    width: u32,
    height: u32,
    tile_size: u16,
    nested_count: u32,
) -> Container {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = sample_grid(&mut rng, width, height, nested_count);
    let nested_images = (0..nested_count)
        .map(|_| sample_nested_image(&mut rng))
        .collect();
    Container::new(grid, tile_size, nested_images)
}

fn sample_grid(rng: &mut StdRng, width: u32, height: u32, nested_count: u32) -> PixelGrid {
    let pixels = (0..width as usize * height as usize)
        .map(|_| PixelLink {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
            nested_index: rng.random_range(0..=nested_count),
        })
        .collect();
    // Length is width * height by construction.
    PixelGrid::from_pixels(width, height, pixels).expect("pixel count matches dimensions")
}

fn sample_nested_image(rng: &mut StdRng) -> NestedImage {
    let width = rng.random_range(NESTED_EDGE_RANGE);
    let height = rng.random_range(NESTED_EDGE_RANGE);
    let mut data = vec![0u8; width as usize * height as usize * 3];
    rng.fill(data.as_mut_slice());
    NestedImage {
        width,
        height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nest::{read_container, validate_container, write_container};

    #[test]
    fn same_seed_same_container() {
        let a = sample_container(7, 20, 10, 4, 3);
        let b = sample_container(7, 20, 10, 4, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = sample_container(1, 20, 10, 4, 3);
        let b = sample_container(2, 20, 10, 4, 3);
        assert_ne!(a, b);
    }

    #[test]
    fn generated_containers_are_valid() {
        let container = sample_container(42, 33, 17, 8, 5);
        assert!(validate_container(&container).is_ok());
        assert_eq!(container.header.nested_count, 5);
        assert_eq!(container.nested_images.len(), 5);
        for img in &container.nested_images {
            assert_eq!(img.data.len(), img.expected_data_len());
        }
    }

    #[test]
    fn generated_containers_roundtrip() {
        let container = sample_container(9, 13, 11, 4, 2);
        let mut bytes = Vec::new();
        write_container(&mut bytes, &container).unwrap();
        assert_eq!(read_container(bytes.as_slice()).unwrap(), container);
    }
}
