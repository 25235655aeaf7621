//! Decoding straight from compressed payloads.

use crate::decompress::Decompressor;
use crate::error::BakeryError;
use alloc::vec;
use alloc::vec::Vec;
use binary_bakery_decoder::element_count::symbol_count;
use binary_bakery_decoder::{decode_into_slice, decode_to_vec, read_header, Header};
use bytemuck::Pod;

/// Decompresses a stored payload into the 8-byte aligned words the decoder consumes.
///
/// The last word is zero-padded if the decompressed size is not a multiple of 8.
///
/// # Errors
///
/// - [`BakeryError::DecompressionFailed`] if the decompressor fails
/// - [`BakeryError::SizeMismatch`] if the decompressor writes fewer bytes than it announced
pub fn decompress_to_words<D: Decompressor>(
    compressed: &[u8],
    decompressor: &D,
) -> Result<Vec<u64>, BakeryError<D::Error>> {
    let size = decompressor
        .decompressed_size(compressed)
        .map_err(BakeryError::DecompressionFailed)?;

    let mut words = vec![0u64; symbol_count::<u64>(size)];
    let output: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    let written = decompressor
        .decompress(compressed, &mut output[..size])
        .map_err(BakeryError::DecompressionFailed)?;

    if written != size {
        return Err(BakeryError::SizeMismatch {
            expected: size,
            actual: written,
        });
    }

    log::debug!(
        "decompressed {} bytes into {} bytes ({} words)",
        compressed.len(),
        size,
        words.len()
    );
    Ok(words)
}

/// Decompresses a stored payload and reads its header.
///
/// Use this to inspect a payload's shape before committing to a decode, for
/// example to pick the capacity for [`binary_bakery_decoder::decode_to_array`].
pub fn read_compressed_header<D: Decompressor>(
    compressed: &[u8],
    decompressor: &D,
) -> Result<Header, BakeryError<D::Error>> {
    let words = decompress_to_words(compressed, decompressor)?;
    Ok(read_header(&words)?)
}

/// Decompresses and decodes a stored payload into a newly allocated [`Vec`].
///
/// # Errors
///
/// - [`BakeryError::DecompressionFailed`] if the decompressor fails
/// - [`BakeryError::Decode`] if the decompressed payload cannot be decoded into `T`
///
/// # Examples
///
/// ```
/// use binary_bakery_api::{decode_compressed_to_vec, NoCompression};
/// use binary_bakery_decoder::{Header, PayloadType};
///
/// let header = Header {
///     payload_type: PayloadType::Generic,
///     bit_count: 3 * 8,
///     ..Header::default()
/// };
/// let mut stored: Vec<u8> = bytemuck::cast_slice(&header.to_words()).to_vec();
/// stored.extend_from_slice(&[7, 8, 9]);
///
/// let bytes = decode_compressed_to_vec::<u8, _>(&stored, &NoCompression)?;
/// assert_eq!(bytes, [7, 8, 9]);
/// # Ok::<(), binary_bakery_api::BakeryError<()>>(())
/// ```
pub fn decode_compressed_to_vec<T: Pod, D: Decompressor>(
    compressed: &[u8],
    decompressor: &D,
) -> Result<Vec<T>, BakeryError<D::Error>> {
    let words = decompress_to_words(compressed, decompressor)?;
    Ok(decode_to_vec(&words)?)
}

/// Decompresses and decodes a stored payload into a buffer owned by the caller.
///
/// Returns the number of elements written.
///
/// # Errors
///
/// - [`BakeryError::DecompressionFailed`] if the decompressor fails
/// - [`BakeryError::Decode`] if the decompressed payload cannot be decoded into `T`,
///   or `output` is too small
pub fn decode_compressed_into_slice<T: Pod, D: Decompressor>(
    compressed: &[u8],
    decompressor: &D,
    output: &mut [T],
) -> Result<usize, BakeryError<D::Error>> {
    let words = decompress_to_words(compressed, decompressor)?;
    Ok(decode_into_slice(&words, output)?)
}
