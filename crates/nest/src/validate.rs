//! Structural validation of a container before encoding.
//!
//! Everything here runs before the first byte reaches the sink: a
//! container that fails validation leaves the sink untouched.

use crate::error::ValidationError;
use crate::model::Container;

/// Checks the invariants the encoder relies on.
///
/// - the main image is non-empty and the tile size nonzero
/// - the header's declared dimensions and nested count match the data
/// - every nested payload is exactly `width * height * 3` bytes
/// - every pixel link is zero or a valid 1-based nested image reference
///
/// An out-of-range pixel link is a hard failure, reported with the
/// offending pixel position. Decoding is deliberately more tolerant; the
/// bound is only enforced on the way out.
pub fn validate_container(container: &Container) -> Result<(), ValidationError> {
    let header = &container.header;
    let grid = &container.main_image;

    if grid.is_empty() {
        return Err(ValidationError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    if header.tile_size == 0 {
        return Err(ValidationError::ZeroTileSize);
    }
    if header.width != grid.width() || header.height != grid.height() {
        return Err(ValidationError::DimensionMismatch {
            declared_width: header.width,
            declared_height: header.height,
            actual_width: grid.width(),
            actual_height: grid.height(),
        });
    }
    if header.nested_count as usize != container.nested_images.len() {
        return Err(ValidationError::NestedCountMismatch {
            declared: header.nested_count,
            actual: container.nested_images.len(),
        });
    }

    for (index, nested) in container.nested_images.iter().enumerate() {
        let expected = nested.expected_data_len();
        if nested.data.len() != expected {
            return Err(ValidationError::NestedPayloadSizeMismatch {
                index,
                width: nested.width,
                height: nested.height,
                expected,
                actual: nested.data.len(),
            });
        }
    }

    let count = header.nested_count;
    for y in 0..grid.height() {
        for (x, pixel) in grid.row(y).iter().enumerate() {
            if pixel.nested_index > count {
                return Err(ValidationError::NestedIndexOutOfRange {
                    x: x as u32,
                    y,
                    index: pixel.nested_index,
                    count,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NestedImage, PixelGrid, PixelLink};

    fn nested(width: u16, height: u16) -> NestedImage {
        NestedImage {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    #[test]
    fn valid_container_passes() {
        let container = Container::new(PixelGrid::new(4, 3), 2, vec![nested(2, 2)]);
        assert!(validate_container(&container).is_ok());
    }

    #[test]
    fn empty_image_rejected() {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let container = Container::new(PixelGrid::new(w, h), 2, Vec::new());
            assert!(matches!(
                validate_container(&container),
                Err(ValidationError::EmptyImage { .. })
            ));
        }
    }

    #[test]
    fn zero_tile_size_rejected() {
        let container = Container::new(PixelGrid::new(4, 4), 0, Vec::new());
        assert!(matches!(
            validate_container(&container),
            Err(ValidationError::ZeroTileSize)
        ));
    }

    #[test]
    fn header_dimension_mismatch_rejected() {
        let mut container = Container::new(PixelGrid::new(4, 4), 2, Vec::new());
        container.header.width = 5;
        assert!(matches!(
            validate_container(&container),
            Err(ValidationError::DimensionMismatch {
                declared_width: 5,
                actual_width: 4,
                ..
            })
        ));
    }

    #[test]
    fn nested_count_mismatch_rejected() {
        let mut container = Container::new(PixelGrid::new(4, 4), 2, vec![nested(2, 2)]);
        container.header.nested_count = 3;
        assert!(matches!(
            validate_container(&container),
            Err(ValidationError::NestedCountMismatch {
                declared: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn short_nested_payload_rejected() {
        let mut bad = nested(50, 60);
        bad.data.pop();
        let container = Container::new(PixelGrid::new(4, 4), 2, vec![nested(2, 2), bad]);
        assert!(matches!(
            validate_container(&container),
            Err(ValidationError::NestedPayloadSizeMismatch {
                index: 1,
                expected: 9000,
                actual: 8999,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_link_rejected_with_position() {
        let mut grid = PixelGrid::new(4, 3);
        *grid.get_mut(2, 1).unwrap() = PixelLink::linked(0, 0, 0, 2);
        let container = Container::new(grid, 2, vec![nested(2, 2)]);
        assert!(matches!(
            validate_container(&container),
            Err(ValidationError::NestedIndexOutOfRange {
                x: 2,
                y: 1,
                index: 2,
                count: 1
            })
        ));
    }

    #[test]
    fn link_equal_to_count_is_valid() {
        let mut grid = PixelGrid::new(2, 2);
        *grid.get_mut(0, 0).unwrap() = PixelLink::linked(0, 0, 0, 1);
        let container = Container::new(grid, 2, vec![nested(2, 2)]);
        assert!(validate_container(&container).is_ok());
    }
}
