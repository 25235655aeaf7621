//! Common test imports and payload builders.

pub use rstest::rstest;

pub use crate::error::DecodeError;
pub use crate::header::{Header, PayloadType, HEADER_WORDS};
pub use bytemuck::{Pod, Zeroable};

pub use alloc::vec;
pub use alloc::vec::Vec;

/// A 3 byte RGB pixel, the most common shape of a baked image.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub(crate) fn generic_header(bit_count: u32) -> Header {
    Header {
        payload_type: PayloadType::Generic,
        bit_count,
        ..Header::default()
    }
}

pub(crate) fn image_header(bpp: u8, width: u16, height: u16) -> Header {
    Header {
        payload_type: PayloadType::Image,
        bpp,
        bit_count: width as u32 * height as u32 * bpp as u32 * 8,
        width,
        height,
        ..Header::default()
    }
}

pub(crate) fn dual_header(bpp: u8, width: u16, height: u16, color0: u32, color1: u32) -> Header {
    Header {
        payload_type: PayloadType::DualImage,
        bpp,
        bit_count: width as u32 * height as u32,
        width,
        height,
        color0,
        color1,
    }
}

/// Lays out `header` followed by `payload` the way the baking tool does,
/// zero-padding the last word.
pub(crate) fn build_payload(header: &Header, payload: &[u8]) -> Vec<u64> {
    let mut words = header.to_words().to_vec();
    words.extend(payload.chunks(8).map(|chunk| {
        let mut bytes = [0u8; 8];
        bytes[..chunk.len()].copy_from_slice(chunk);
        u64::from_ne_bytes(bytes)
    }));
    words
}

#[test]
fn build_payload_starts_after_header() {
    let words = build_payload(&generic_header(72), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(words.len(), HEADER_WORDS + 2);
    assert_eq!(words[HEADER_WORDS + 1].to_ne_bytes(), [9, 0, 0, 0, 0, 0, 0, 0]);
}
