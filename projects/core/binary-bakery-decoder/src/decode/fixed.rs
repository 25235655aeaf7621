use super::{payload_bytes, validate};
use crate::color::element_color_pair;
use crate::error::DecodeError;
use crate::header::{Header, PayloadType};
use crate::reconstruct::reconstruct;
use bytemuck::Pod;
use core::mem::size_of;
use core::ops::Deref;

/// Output of [`decode_to_array`].
///
/// Generic binaries and plain images are borrowed straight from the input
/// words when the element type's alignment allows it. Indexed images are
/// always reconstructed into an owned array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedPayload<'a, T, const N: usize> {
    /// Elements viewed in place inside the input words.
    Borrowed(&'a [T; N]),
    /// Elements copied or reconstructed out of the input words.
    Owned([T; N]),
}

impl<T: Copy, const N: usize> FixedPayload<'_, T, N> {
    /// Returns the elements by value, copying them if they are borrowed.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        match self {
            Self::Borrowed(elements) => *elements,
            Self::Owned(elements) => elements,
        }
    }

    /// Whether the elements are viewed in place inside the input words.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }
}

impl<T, const N: usize> Deref for FixedPayload<'_, T, N> {
    type Target = [T; N];

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(elements) => elements,
            Self::Owned(elements) => elements,
        }
    }
}

/// Decodes a payload whose shape is already known into exactly `N` elements.
///
/// This is the second step of a two-step decode: first inspect the payload
/// with [`read_header`](crate::read_header) (or keep a [`Header`] around from
/// an earlier inspection), then decode with the capacity it implies. No
/// allocation takes place.
///
/// For generic binaries and plain images the result borrows from `words`.
/// Input words are 8-byte aligned and the payload starts at byte 24, so any
/// element type aligned to 8 bytes or less can be viewed in place; more
/// strictly aligned types are copied instead.
///
/// # Errors
///
/// - [`DecodeError::NoElements`] if the payload holds no elements of type `T`
/// - [`DecodeError::CapacityMismatch`] if `N` differs from the payload's element count
/// - [`DecodeError::InputTooShort`] if `words` ends before the declared payload
/// - [`DecodeError::ElementSizeMismatch`] if `T` is not `bpp` bytes wide for an indexed image
/// - [`DecodeError::UnsupportedElementSize`] if `T` is zero-sized, or wider than 4 bytes for an indexed image
///
/// # Examples
///
/// ```
/// use binary_bakery_decoder::{decode_to_array, read_header, Header, PayloadType};
///
/// let header = Header {
///     payload_type: PayloadType::Image,
///     bpp: 2,
///     bit_count: 4 * 2 * 8,
///     width: 2,
///     height: 2,
///     ..Header::default()
/// };
/// let mut words = header.to_words().to_vec();
/// words.push(u64::from_ne_bytes([1, 1, 2, 2, 3, 3, 4, 4]));
///
/// let header = read_header(&words)?;
/// let pixels = decode_to_array::<[u8; 2], 4>(&words, &header)?;
///
/// assert!(pixels.is_borrowed());
/// assert_eq!(*pixels, [[1, 1], [2, 2], [3, 3], [4, 4]]);
/// # Ok::<(), binary_bakery_decoder::DecodeError>(())
/// ```
pub fn decode_to_array<'a, T: Pod, const N: usize>(
    words: &'a [u64],
    header: &Header,
) -> Result<FixedPayload<'a, T, N>, DecodeError> {
    let element_count = validate::<T>(words, header)?;
    if element_count == 0 {
        return Err(DecodeError::NoElements);
    }
    if element_count != N {
        return Err(DecodeError::CapacityMismatch {
            expected: element_count,
            actual: N,
        });
    }

    let payload = payload_bytes(words);
    if header.payload_type == PayloadType::DualImage {
        let (color0, color1) = element_color_pair::<T>(header)?;
        let mut result = [color0; N];
        reconstruct(payload, &mut result, color0, color1);
        return Ok(FixedPayload::Owned(result));
    }

    let bytes = &payload[..N * size_of::<T>()];
    if let Ok(elements) = bytemuck::try_cast_slice::<u8, T>(bytes) {
        if let Ok(elements) = <&[T; N]>::try_from(elements) {
            return Ok(FixedPayload::Borrowed(elements));
        }
    }

    log::debug!(
        "element alignment of {} bytes prevents in-place view, copying {} bytes",
        core::mem::align_of::<T>(),
        bytes.len()
    );
    let mut result = [T::zeroed(); N];
    bytemuck::cast_slice_mut::<T, u8>(&mut result).copy_from_slice(bytes);
    Ok(FixedPayload::Owned(result))
}
