//! Replacement colours of indexed images.
//!
//! The header stores both colours as 4 bytes each. An image with fewer bytes
//! per pixel uses only the leading bytes, in the order they are stored.

use crate::error::DecodeError;
use crate::header::Header;
use bytemuck::Pod;
use core::mem::size_of;

/// Largest number of bytes per pixel a replacement colour can hold.
pub const MAX_COLOR_BYTES: usize = 4;

/// A replacement colour truncated to a pixel's byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizedColor {
    components: [u8; MAX_COLOR_BYTES],
    bpp: u8,
}

impl SizedColor {
    fn new(packed: u32, bpp: usize) -> Self {
        let mut components = packed.to_le_bytes();
        components[bpp..].fill(0);
        Self {
            components,
            bpp: bpp as u8,
        }
    }

    /// Bytes per pixel of this colour.
    #[inline]
    pub fn bpp(&self) -> usize {
        self.bpp as usize
    }

    /// The colour's components, one byte per channel.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.components[..self.bpp as usize]
    }

    /// Reinterprets the components as a pixel of type `T`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::ElementSizeMismatch`] if `T` is not exactly [`Self::bpp`] bytes wide
    pub fn to_element<T: Pod>(&self) -> Result<T, DecodeError> {
        if size_of::<T>() != self.bpp() {
            return Err(DecodeError::ElementSizeMismatch {
                bpp: self.bpp,
                element_size: size_of::<T>(),
            });
        }

        Ok(bytemuck::pod_read_unaligned(self.as_bytes()))
    }
}

/// Both replacement colours of an indexed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    /// Colour of pixels whose bit is 0.
    pub color0: SizedColor,
    /// Colour of pixels whose bit is 1.
    pub color1: SizedColor,
}

/// Extracts both replacement colours from `header`, truncated to `bpp` bytes.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedElementSize`] if `bpp` is not between 1 and 4
///
/// # Examples
///
/// ```
/// use binary_bakery_decoder::{sized_color_pair, Header, PayloadType};
///
/// let header = Header {
///     payload_type: PayloadType::DualImage,
///     color0: u32::from_le_bytes([0x10, 0x20, 0x30, 0x40]),
///     color1: u32::from_le_bytes([0xA0, 0xB0, 0xC0, 0xD0]),
///     ..Header::default()
/// };
///
/// let pair = sized_color_pair(&header, 3)?;
/// assert_eq!(pair.color0.as_bytes(), &[0x10, 0x20, 0x30]);
/// assert_eq!(pair.color1.as_bytes(), &[0xA0, 0xB0, 0xC0]);
/// # Ok::<(), binary_bakery_decoder::DecodeError>(())
/// ```
pub fn sized_color_pair(header: &Header, bpp: usize) -> Result<ColorPair, DecodeError> {
    if !(1..=MAX_COLOR_BYTES).contains(&bpp) {
        return Err(DecodeError::UnsupportedElementSize(bpp));
    }

    Ok(ColorPair {
        color0: SizedColor::new(header.color0, bpp),
        color1: SizedColor::new(header.color1, bpp),
    })
}

/// Extracts both replacement colours from `header` as pixels of type `T`.
///
/// The colours are truncated to the size of `T`.
pub fn element_color_pair<T: Pod>(header: &Header) -> Result<(T, T), DecodeError> {
    let pair = sized_color_pair(header, size_of::<T>())?;
    Ok((pair.color0.to_element()?, pair.color1.to_element()?))
}
