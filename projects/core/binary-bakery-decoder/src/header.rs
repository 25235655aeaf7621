//! Reading and writing of the fixed 24-byte payload header.
//!
//! # The Header Format
//!
//! The header occupies the first three 64-bit words of every payload.
//! All fields are little-endian and all reserved bytes are zero.
//!
//! | offset | field       | size | notes                                          |
//! |--------|-------------|------|------------------------------------------------|
//! | 0      | `type`      | 1    | 0: generic binary, 1: image, 2: indexed image   |
//! | 1      | `bpp`       | 1    | bytes per pixel (1-4), images only              |
//! | 2      | reserved    | 2    |                                                |
//! | 4      | `bit_count` | 4    | significant bits of the encoded payload         |
//! | 8      | `width`     | 2    | images only                                    |
//! | 10     | `height`    | 2    | images only                                    |
//! | 12     | reserved    | 4    |                                                |
//! | 16     | `color0`    | 4    | indexed images only                            |
//! | 20     | `color1`    | 4    | indexed images only                            |
//!
//! Word 1 is only read for image payloads and word 2 only for indexed images.
//! The payload itself always starts at word 3.
//!
//! There is no magic number or version field; the caller has to know from
//! context that the words hold a baked payload.

use crate::error::DecodeError;
use core::slice;

/// Size of the header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Size of the header in 64-bit words. The payload starts at this word index.
pub const HEADER_WORDS: usize = HEADER_SIZE / 8;

/// The kind of data stored in a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PayloadType {
    /// Arbitrary bytes. The caller picks the element type.
    #[default]
    Generic,
    /// An uncompressed image of `width * height` pixels, `bpp` bytes each.
    Image,
    /// An image stored as a one bit per pixel bitmap selecting between two colours.
    DualImage,
    /// A type value this decoder does not know about.
    Unknown(u8),
}

impl PayloadType {
    /// Convert from the raw header byte.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Generic,
            1 => Self::Image,
            2 => Self::DualImage,
            other => Self::Unknown(other),
        }
    }

    /// Convert to the raw header byte.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Generic => 0,
            Self::Image => 1,
            Self::DualImage => 2,
            Self::Unknown(value) => value,
        }
    }

    /// Whether the payload holds pixels.
    #[inline]
    pub fn is_image(self) -> bool {
        matches!(self, Self::Image | Self::DualImage)
    }
}

/// Decoded header of a baked payload.
///
/// This is a plain value; it holds no reference to the words it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Header {
    /// What the payload contains.
    pub payload_type: PayloadType,
    /// Bytes per pixel. Only meaningful for images.
    pub bpp: u8,
    /// Number of significant bits in the encoded payload.
    pub bit_count: u32,
    /// Width in pixels. Zero for generic binaries.
    pub width: u16,
    /// Height in pixels. Zero for generic binaries.
    pub height: u16,
    /// First replacement colour of an indexed image, packed as stored.
    pub color0: u32,
    /// Second replacement colour of an indexed image, packed as stored.
    pub color1: u32,
}

impl Header {
    /// Whether the payload holds pixels.
    #[inline]
    pub fn is_image(&self) -> bool {
        self.payload_type.is_image()
    }

    /// Number of `T` elements the payload decodes to.
    ///
    /// See [`crate::element_count::element_count`].
    #[inline]
    pub fn element_count<T>(&self) -> usize {
        crate::element_count::element_count::<T>(self)
    }

    /// Number of pixels in an image payload.
    ///
    /// See [`crate::element_count::pixel_count`].
    #[inline]
    pub fn pixel_count(&self) -> Result<usize, DecodeError> {
        crate::element_count::pixel_count(self)
    }

    /// Serializes the header into its three-word wire form, zeroing all reserved bytes.
    pub fn to_words(&self) -> [u64; HEADER_WORDS] {
        let mut front = [0u8; 8];
        front[0] = self.payload_type.to_u8();
        front[1] = self.bpp;
        front[4..8].copy_from_slice(&self.bit_count.to_le_bytes());

        let mut dimensions = [0u8; 8];
        dimensions[0..2].copy_from_slice(&self.width.to_le_bytes());
        dimensions[2..4].copy_from_slice(&self.height.to_le_bytes());

        let mut colors = [0u8; 8];
        colors[0..4].copy_from_slice(&self.color0.to_le_bytes());
        colors[4..8].copy_from_slice(&self.color1.to_le_bytes());

        [
            u64::from_ne_bytes(front),
            u64::from_ne_bytes(dimensions),
            u64::from_ne_bytes(colors),
        ]
    }
}

/// Number of leading words the header of a payload with the given raw type occupies.
#[inline]
pub const fn header_word_count(payload_type: u8) -> usize {
    match payload_type {
        0 => 1,
        2 => 3,
        _ => 2,
    }
}

#[inline(always)]
fn raw_type(word: u64) -> u8 {
    word.to_ne_bytes()[0]
}

/// Parses a header from words already known to be long enough.
fn parse_header(words: &[u64]) -> Header {
    let front = words[0].to_ne_bytes();
    let mut result = Header {
        payload_type: PayloadType::from_u8(front[0]),
        bpp: front[1],
        bit_count: u32::from_le_bytes([front[4], front[5], front[6], front[7]]),
        ..Header::default()
    };

    if front[0] > 0 {
        let dimensions = words[1].to_ne_bytes();
        result.width = u16::from_le_bytes([dimensions[0], dimensions[1]]);
        result.height = u16::from_le_bytes([dimensions[2], dimensions[3]]);
    }

    if front[0] == 2 {
        let colors = words[2].to_ne_bytes();
        result.color0 = u32::from_le_bytes([colors[0], colors[1], colors[2], colors[3]]);
        result.color1 = u32::from_le_bytes([colors[4], colors[5], colors[6], colors[7]]);
    }

    result
}

/// Reads the header from the start of a payload.
///
/// Only the words that carry fields for the payload's type are read: word 0
/// always, word 1 for images and word 2 for indexed images.
///
/// # Errors
///
/// - [`DecodeError::InputTooShort`] if `words` ends before the fields the type requires
///
/// # Examples
///
/// ```
/// use binary_bakery_decoder::{read_header, Header, PayloadType};
///
/// let header = Header {
///     payload_type: PayloadType::Image,
///     bpp: 3,
///     bit_count: 4 * 3 * 8,
///     width: 2,
///     height: 2,
///     ..Header::default()
/// };
/// let words = header.to_words();
///
/// assert_eq!(read_header(&words)?, header);
/// # Ok::<(), binary_bakery_decoder::DecodeError>(())
/// ```
pub fn read_header(words: &[u64]) -> Result<Header, DecodeError> {
    let Some(&front) = words.first() else {
        return Err(DecodeError::InputTooShort {
            needed: 1,
            actual: 0,
        });
    };

    let needed = header_word_count(raw_type(front));
    if words.len() < needed {
        return Err(DecodeError::InputTooShort {
            needed,
            actual: words.len(),
        });
    }

    Ok(parse_header(words))
}

/// Reads the header from the start of a payload without checking the input length.
///
/// # Safety
///
/// - `words` must be valid for reads of 1 word
/// - if the first byte is non-zero, `words` must be valid for reads of 2 words
/// - if the first byte is `2`, `words` must be valid for reads of 3 words
#[inline]
pub unsafe fn read_header_unchecked(words: *const u64) -> Header {
    let needed = header_word_count(raw_type(words.read()));
    parse_header(slice::from_raw_parts(words, needed))
}

/// Writes the header to the start of `output`.
///
/// # Errors
///
/// - [`DecodeError::InputTooShort`] if `output` is shorter than [`HEADER_WORDS`]
pub fn write_header(header: &Header, output: &mut [u64]) -> Result<(), DecodeError> {
    if output.len() < HEADER_WORDS {
        return Err(DecodeError::InputTooShort {
            needed: HEADER_WORDS,
            actual: output.len(),
        });
    }

    output[..HEADER_WORDS].copy_from_slice(&header.to_words());
    Ok(())
}

/// Whether the payload holds an image, judged from its first byte alone.
///
/// Empty input is not an image.
#[inline]
pub fn is_image(words: &[u64]) -> bool {
    words
        .first()
        .is_some_and(|&front| PayloadType::from_u8(raw_type(front)).is_image())
}

/// Width of an image payload in pixels, or [`None`] if the payload is not an image.
pub fn width(words: &[u64]) -> Option<u16> {
    let dimensions = image_dimensions_word(words)?;
    Some(u16::from_le_bytes([dimensions[0], dimensions[1]]))
}

/// Height of an image payload in pixels, or [`None`] if the payload is not an image.
pub fn height(words: &[u64]) -> Option<u16> {
    let dimensions = image_dimensions_word(words)?;
    Some(u16::from_le_bytes([dimensions[2], dimensions[3]]))
}

#[inline]
fn image_dimensions_word(words: &[u64]) -> Option<[u8; 8]> {
    if !is_image(words) {
        return None;
    }
    words.get(1).map(|word| word.to_ne_bytes())
}
