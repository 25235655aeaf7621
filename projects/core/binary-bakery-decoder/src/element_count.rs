//! Number of output elements a payload decodes to.
//!
//! For images that's the number of pixels. For generic binaries that's the
//! number of elements of the type the caller decodes into.

use crate::error::DecodeError;
use crate::header::{read_header, Header, PayloadType, HEADER_WORDS};
use core::mem::size_of;

/// Number of `T` elements the payload described by `header` decodes to.
///
/// - Indexed images yield one element per pixel, regardless of `T`.
/// - Everything else yields the whole payload bytes divided by the size of `T`.
///
/// Whether `T` is as wide as the header's `bpp` is not checked here.
#[inline]
pub fn element_count<T>(header: &Header) -> usize {
    match header.payload_type {
        PayloadType::DualImage => header.width as usize * header.height as usize,
        _ => {
            let byte_count = header.bit_count as usize / 8;
            byte_count.checked_div(size_of::<T>()).unwrap_or(0)
        }
    }
}

/// Number of pixels in the payload described by `header`.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedOperation`] for generic binaries, which have no
///   implicit element width; use [`element_count`] instead.
#[inline]
pub fn pixel_count(header: &Header) -> Result<usize, DecodeError> {
    match header.payload_type {
        PayloadType::Generic => Err(DecodeError::UnsupportedOperation),
        _ => Ok(header.width as usize * header.height as usize),
    }
}

/// Reads the header from `words` and returns [`element_count`] for it.
pub fn element_count_of<T>(words: &[u64]) -> Result<usize, DecodeError> {
    Ok(element_count::<T>(&read_header(words)?))
}

/// Reads the header from `words` and returns [`pixel_count`] for it.
pub fn pixel_count_of(words: &[u64]) -> Result<usize, DecodeError> {
    pixel_count(&read_header(words)?)
}

/// Number of bytes needed to hold `bit_count` bits.
#[inline]
pub const fn byte_count_from_bit_count(bit_count: u32) -> usize {
    (bit_count as usize).div_ceil(8)
}

/// Number of `T` needed to hold `byte_count` bytes, rounding up.
#[inline]
pub const fn symbol_count<T>(byte_count: usize) -> usize {
    match size_of::<T>() {
        0 => 0,
        size => byte_count.div_ceil(size),
    }
}

/// Size of the encoded payload in bytes, as declared by the header.
///
/// Indexed images round up to cover every bit; other payloads hold whole bytes.
#[inline]
pub fn payload_byte_count(header: &Header) -> usize {
    match header.payload_type {
        PayloadType::DualImage => byte_count_from_bit_count(header.bit_count),
        _ => header.bit_count as usize / 8,
    }
}

/// Number of payload bytes read when decoding into `T`.
#[inline]
pub fn encoded_byte_count<T>(header: &Header) -> usize {
    let element_count = element_count::<T>(header);
    match header.payload_type {
        PayloadType::DualImage => element_count.div_ceil(8),
        _ => element_count * size_of::<T>(),
    }
}

/// Number of words an input must have for it to be decoded into `T`.
#[inline]
pub fn required_word_count<T>(header: &Header) -> usize {
    HEADER_WORDS + symbol_count::<u64>(encoded_byte_count::<T>(header))
}
