//! Test prelude for API tests.

pub use crate::decompress::{Decompressor, NoCompression};
pub use crate::error::BakeryError;
pub use binary_bakery_decoder::{DecodeError, Header, PayloadType};

use alloc::vec::Vec;

/// A decompressor that always fails.
pub struct FailingDecompressor;

impl Decompressor for FailingDecompressor {
    type Error = &'static str;

    fn decompressed_size(&self, _input: &[u8]) -> Result<usize, Self::Error> {
        Err("broken")
    }

    fn decompress(&self, _input: &[u8], _output: &mut [u8]) -> Result<usize, Self::Error> {
        Err("broken")
    }
}

/// A decompressor that writes one byte less than it announces.
pub struct ShortDecompressor;

impl Decompressor for ShortDecompressor {
    type Error = ();

    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error> {
        Ok(input.len())
    }

    fn decompress(&self, input: &[u8], _output: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(input.len() - 1)
    }
}

/// An uncompressed black and white indexed image as it would be stored.
pub(crate) fn stored_dual_image(bpp: u8, width: u16, height: u16, bitmap: &[u8]) -> Vec<u8> {
    let header = Header {
        payload_type: PayloadType::DualImage,
        bpp,
        bit_count: width as u32 * height as u32,
        width,
        height,
        color0: 0x0000_0000,
        color1: 0xFFFF_FFFF,
    };
    let mut stored: Vec<u8> = bytemuck::cast_slice(&header.to_words()).to_vec();
    stored.extend_from_slice(bitmap);
    stored
}
