use super::{payload_bytes, validate, write_elements};
use crate::error::DecodeError;
use crate::header::read_header;
use alloc::vec;
use alloc::vec::Vec;
use bytemuck::Pod;

/// Decodes a payload into a newly allocated [`Vec`].
///
/// The vector holds exactly as many elements as the payload decodes to and
/// owns a private copy of the data; nothing in `words` is aliased.
///
/// # Errors
///
/// - [`DecodeError::InputTooShort`] if `words` ends before the declared payload
///   The payload always starts at word 3, so an empty generic payload still needs all
///   three header words even though [`read_header`] accepts a single one.
/// - [`DecodeError::ElementSizeMismatch`] if `T` is not `bpp` bytes wide for an indexed image
/// - [`DecodeError::UnsupportedElementSize`] if `T` is zero-sized, or wider than 4 bytes for an indexed image
///
/// # Examples
///
/// ```
/// use binary_bakery_decoder::{decode_to_vec, Header, PayloadType};
///
/// let header = Header {
///     payload_type: PayloadType::Generic,
///     bit_count: 8 * 8,
///     ..Header::default()
/// };
/// let mut words = header.to_words().to_vec();
/// words.push(u64::from_ne_bytes([1, 0, 2, 0, 3, 0, 4, 0]));
///
/// let values = decode_to_vec::<[u8; 2]>(&words)?;
/// assert_eq!(values, [[1, 0], [2, 0], [3, 0], [4, 0]]);
/// # Ok::<(), binary_bakery_decoder::DecodeError>(())
/// ```
pub fn decode_to_vec<T: Pod>(words: &[u64]) -> Result<Vec<T>, DecodeError> {
    let header = read_header(words)?;
    let element_count = validate::<T>(words, &header)?;

    let mut result = vec![T::zeroed(); element_count];
    write_elements(&header, payload_bytes(words), &mut result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn generic_binary_round_trips() {
        let bytes: Vec<u8> = (0..=255).collect();
        let words = build_payload(&generic_header(bytes.len() as u32 * 8), &bytes);

        assert_eq!(decode_to_vec::<u8>(&words).unwrap(), bytes);

        let halves = decode_to_vec::<[u8; 2]>(&words).unwrap();
        assert_eq!(halves.len(), 128);
        assert_eq!(halves[1], [2, 3]);
    }

    #[test]
    fn generic_binary_drops_partial_trailing_element() {
        let bytes = [1u8, 2, 3, 4, 5];
        let words = build_payload(&generic_header(40), &bytes);

        let pairs = decode_to_vec::<[u8; 2]>(&words).unwrap();
        assert_eq!(pairs, [[1, 2], [3, 4]]);
    }

    #[test]
    fn plain_image_round_trips_pixel_for_pixel() {
        let pixels: Vec<Rgb> = (0..15u8)
            .map(|index| Rgb::new(index, index.wrapping_mul(3), 255 - index))
            .collect();
        let words = build_payload(&image_header(3, 5, 3), bytemuck::cast_slice(&pixels));

        assert_eq!(decode_to_vec::<Rgb>(&words).unwrap(), pixels);
    }

    #[test]
    fn indexed_image_reconstructs_colours() {
        let color0 = u32::from_le_bytes([10, 20, 30, 40]);
        let color1 = u32::from_le_bytes([50, 60, 70, 80]);
        let words = build_payload(
            &dual_header(4, 3, 3, color0, color1),
            &[0b0100_0000, 0b1000_0000],
        );

        let pixels = decode_to_vec::<[u8; 4]>(&words).unwrap();
        let mut expected: Vec<[u8; 4]> = vec![[10, 20, 30, 40]; 9];
        expected[1] = [50, 60, 70, 80];
        expected[8] = [50, 60, 70, 80];
        assert_eq!(pixels, expected);
    }

    #[test]
    fn empty_generic_binary_decodes_to_empty_vec() {
        let words = build_payload(&generic_header(0), &[]);
        assert!(decode_to_vec::<u32>(&words).unwrap().is_empty());
    }

    #[test]
    fn unknown_payload_type_is_sized_like_generic() {
        let header = Header {
            payload_type: PayloadType::Unknown(3),
            bpp: 1,
            bit_count: 6 * 8,
            width: 2,
            height: 3,
            ..Header::default()
        };
        let words = build_payload(&header, &[9, 8, 7, 6, 5, 4]);

        assert_eq!(crate::read_header(&words).unwrap().width, 2);
        assert_eq!(header.element_count::<[u8; 2]>(), 3);
        assert_eq!(decode_to_vec::<u8>(&words).unwrap(), [9, 8, 7, 6, 5, 4]);
        assert_eq!(
            decode_to_vec::<[u8; 2]>(&words).unwrap(),
            [[9, 8], [7, 6], [5, 4]]
        );
    }

    #[test]
    fn single_word_generic_header_needs_full_header_to_decode() {
        let header_words = generic_header(0).to_words();
        let words = &header_words[..1];

        assert!(crate::read_header(words).is_ok());
        assert_eq!(
            decode_to_vec::<u8>(words),
            Err(DecodeError::InputTooShort {
                needed: HEADER_WORDS,
                actual: 1
            })
        );
    }
}
