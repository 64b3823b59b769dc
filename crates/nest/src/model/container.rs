//! The complete in-memory representation of one NEST file.

use crate::limits::FORMAT_VERSION;
use crate::model::{Header, NestedImage, PixelGrid, PixelLink};

/// One NEST container: header, main image, and nested image sequence.
///
/// A container is built in memory, written once to a sink, or
/// reconstructed once from a source; the format defines no in-place
/// mutation protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub header: Header,
    pub main_image: PixelGrid,
    pub nested_images: Vec<NestedImage>,
}

impl Container {
    /// Creates a container whose header agrees with the supplied data, at
    /// the current format version.
    pub fn new(main_image: PixelGrid, tile_size: u16, nested_images: Vec<NestedImage>) -> Self {
        let header = Header {
            version: FORMAT_VERSION,
            width: main_image.width(),
            height: main_image.height(),
            tile_size,
            nested_count: nested_images.len() as u32,
        };
        Self {
            header,
            main_image,
            nested_images,
        }
    }

    /// Resolves a pixel's nested-image link.
    ///
    /// Links are 1-based; returns `None` for unlinked pixels and for links
    /// beyond the sequence.
    pub fn nested_image_for(&self, pixel: &PixelLink) -> Option<&NestedImage> {
        if pixel.nested_index == 0 {
            None
        } else {
            self.nested_images.get(pixel.nested_index as usize - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(width: u16, height: u16) -> NestedImage {
        NestedImage {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    #[test]
    fn new_builds_consistent_header() {
        let container = Container::new(PixelGrid::new(10, 4), 8, vec![nested(2, 2), nested(3, 1)]);
        assert_eq!(container.header.version, FORMAT_VERSION);
        assert_eq!(container.header.width, 10);
        assert_eq!(container.header.height, 4);
        assert_eq!(container.header.tile_size, 8);
        assert_eq!(container.header.nested_count, 2);
    }

    #[test]
    fn link_resolution_is_one_based() {
        let container = Container::new(PixelGrid::new(1, 1), 1, vec![nested(2, 2)]);
        assert!(container.nested_image_for(&PixelLink::rgb(0, 0, 0)).is_none());
        assert_eq!(
            container.nested_image_for(&PixelLink::linked(0, 0, 0, 1)),
            Some(&container.nested_images[0])
        );
        // A dangling link resolves to nothing rather than panicking.
        assert!(
            container
                .nested_image_for(&PixelLink::linked(0, 0, 0, 2))
                .is_none()
        );
    }
}
