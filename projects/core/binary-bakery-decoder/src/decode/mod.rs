//! The three ways of getting decoded elements out of a payload.
//!
//! All of them share the same steps: read the header, compute the element
//! count, then either copy the payload bytes as they are (generic binaries and
//! plain images) or expand the bitmap with the replacement colours (indexed
//! images). They differ only in who owns the output:
//!
//! - [`decode_to_array`]: fixed capacity known up front, zero-copy where possible
//! - [`decode_to_vec`]: a freshly allocated [`Vec`](alloc::vec::Vec)
//! - [`decode_into_slice`] / [`decode_into_ptr`]: storage provided by the caller

mod allocating;
mod fixed;
mod into_buffer;

pub use allocating::decode_to_vec;
pub use fixed::{decode_to_array, FixedPayload};
pub use into_buffer::{decode_into_ptr, decode_into_slice};

use crate::color::element_color_pair;
use crate::element_count::{element_count, required_word_count};
use crate::error::DecodeError;
use crate::header::{Header, PayloadType, HEADER_WORDS};
use crate::reconstruct::reconstruct;
use bytemuck::Pod;
use core::mem::size_of;

/// Checks that `words` can be decoded into `T` as described by `header`,
/// returning the element count.
pub(crate) fn validate<T>(words: &[u64], header: &Header) -> Result<usize, DecodeError> {
    if size_of::<T>() == 0 {
        return Err(DecodeError::UnsupportedElementSize(0));
    }

    if header.payload_type == PayloadType::DualImage && size_of::<T>() != header.bpp as usize {
        return Err(DecodeError::ElementSizeMismatch {
            bpp: header.bpp,
            element_size: size_of::<T>(),
        });
    }

    let needed = required_word_count::<T>(header);
    if words.len() < needed {
        return Err(DecodeError::InputTooShort {
            needed,
            actual: words.len(),
        });
    }

    let count = element_count::<T>(header);
    log::trace!(
        "decoding {:?} payload into {} elements of {} bytes",
        header.payload_type,
        count,
        size_of::<T>()
    );
    Ok(count)
}

/// The bytes following the header.
///
/// `words` must hold at least [`HEADER_WORDS`] words; [`validate`] guarantees this.
#[inline]
pub(crate) fn payload_bytes(words: &[u64]) -> &[u8] {
    bytemuck::cast_slice(&words[HEADER_WORDS..])
}

/// Fills `output` with the decoded elements of a validated payload.
pub(crate) fn write_elements<T: Pod>(
    header: &Header,
    payload: &[u8],
    output: &mut [T],
) -> Result<(), DecodeError> {
    match header.payload_type {
        PayloadType::DualImage => {
            let (color0, color1) = element_color_pair::<T>(header)?;
            reconstruct(payload, output, color0, color1);
        }
        _ => {
            let destination: &mut [u8] = bytemuck::cast_slice_mut(output);
            let byte_count = destination.len();
            destination.copy_from_slice(&payload[..byte_count]);
        }
    }
    Ok(())
}
