//! Nested sub-images: independently sized raw RGB payloads.

use crate::limits::NESTED_BYTES_PER_PIXEL;

/// An embedded sub-image: dimensions plus a raw RGB payload.
///
/// The payload is opaque to the format; its length must be exactly
/// `width * height * 3` bytes. Main-image pixels refer to nested images by
/// 1-based position in the container's sequence — the format enforces
/// nothing about that mapping beyond the bound check at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedImage {
    pub width: u16,
    pub height: u16,
    /// Raw RGB bytes, `width * height * 3` of them.
    pub data: Vec<u8>,
}

impl NestedImage {
    /// Payload length implied by the dimensions.
    pub fn expected_data_len(&self) -> usize {
        self.width as usize * self.height as usize * NESTED_BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_len_is_rgb() {
        let img = NestedImage {
            width: 50,
            height: 60,
            data: Vec::new(),
        };
        assert_eq!(img.expected_data_len(), 9000);
    }
}
