use super::{payload_bytes, validate, write_elements};
use crate::color::element_color_pair;
use crate::error::DecodeError;
use crate::header::{read_header, PayloadType};
use crate::reconstruct::reconstruct_unchecked;
use bytemuck::Pod;
use core::mem::size_of;
use core::ptr::copy_nonoverlapping;

/// Decodes a payload into a buffer owned by the caller.
///
/// Only the first `n` elements of `output` are written, where `n` is the
/// payload's element count. Returns `n`.
///
/// # Errors
///
/// - [`DecodeError::OutputBufferTooSmall`] if `output` holds fewer than `n` elements
/// - [`DecodeError::InputTooShort`] if `words` ends before the declared payload
///   The payload always starts at word 3, so an empty generic payload still needs all
///   three header words even though [`read_header`] accepts a single one.
/// - [`DecodeError::ElementSizeMismatch`] if `T` is not `bpp` bytes wide for an indexed image
/// - [`DecodeError::UnsupportedElementSize`] if `T` is zero-sized, or wider than 4 bytes for an indexed image
pub fn decode_into_slice<T: Pod>(words: &[u64], output: &mut [T]) -> Result<usize, DecodeError> {
    let header = read_header(words)?;
    let element_count = validate::<T>(words, &header)?;

    if output.len() < element_count {
        return Err(DecodeError::OutputBufferTooSmall {
            needed: element_count,
            actual: output.len(),
        });
    }

    write_elements(&header, payload_bytes(words), &mut output[..element_count])?;
    Ok(element_count)
}

/// Decodes a payload into raw storage owned by the caller, without checking its capacity.
///
/// Intended for writing straight into memory that already exists, such as a
/// mapped upload buffer, where a [`decode_into_slice`] wrapper is not available.
/// `capacity` is the number of elements the caller has made room for; it is
/// only checked in debug builds. Returns the number of elements written.
///
/// The header and input length are still validated; see [`decode_into_slice`]
/// for the errors that can be returned. Nothing is written on error.
///
/// # Safety
///
/// - `output` must be valid for writes of `capacity` elements of `T`
/// - `output` must be aligned for `T`
/// - `capacity` must be at least the payload's element count
///   (see [`crate::element_count_of`]); writing past it is undefined behaviour
/// - `output` must not overlap `words`
pub unsafe fn decode_into_ptr<T: Pod>(
    words: &[u64],
    output: *mut T,
    capacity: usize,
) -> Result<usize, DecodeError> {
    let header = read_header(words)?;
    let element_count = validate::<T>(words, &header)?;
    debug_assert!(
        capacity >= element_count,
        "output holds {capacity} elements but payload has {element_count}"
    );

    let payload = payload_bytes(words);
    match header.payload_type {
        PayloadType::DualImage => {
            let (color0, color1) = element_color_pair::<T>(&header)?;
            reconstruct_unchecked(element_count, payload.as_ptr(), output, color0, color1);
        }
        _ => copy_nonoverlapping(
            payload.as_ptr(),
            output as *mut u8,
            element_count * size_of::<T>(),
        ),
    }

    Ok(element_count)
}
