//! Expansion of one bit per pixel bitmaps into full pixels.
//!
//! Bits are read most significant bit first: pixel `i` lives in byte `i / 8`
//! at bit `7 - (i % 8)`. A cleared bit selects the first colour, a set bit the second.

/// Expands the bitmap in `source` into `target`, one pixel per bit.
///
/// Reads at most `target.len().div_ceil(8)` bytes of `source`. If `source` is
/// shorter than that, the pixels it does not cover are left untouched.
///
/// # Examples
///
/// ```
/// use binary_bakery_decoder::reconstruct;
///
/// let mut pixels = [0u8; 4];
/// reconstruct(&[0b1010_0000], &mut pixels, 0x00, 0xFF);
/// assert_eq!(pixels, [0xFF, 0x00, 0xFF, 0x00]);
/// ```
#[inline]
pub fn reconstruct<T: Copy>(source: &[u8], target: &mut [T], color0: T, color1: T) {
    for (pixels, &bits) in target.chunks_mut(8).zip(source) {
        for (bit_index, pixel) in pixels.iter_mut().enumerate() {
            let mask = 0x80u8 >> bit_index;
            *pixel = if bits & mask != 0 { color1 } else { color0 };
        }
    }
}

/// Expands `element_count` bits starting at `source` into pixels written to `target`.
///
/// # Safety
///
/// - `source` must be valid for reads of `element_count.div_ceil(8)` bytes
/// - `target` must be valid for writes of `element_count` elements of `T`
/// - `target` must be aligned for `T`
#[inline]
pub unsafe fn reconstruct_unchecked<T: Copy>(
    element_count: usize,
    source: *const u8,
    target: *mut T,
    color0: T,
    color1: T,
) {
    for index in 0..element_count {
        let bits = *source.add(index / 8);
        let shift = 7 - (index % 8);
        let value = if (bits >> shift) & 1 != 0 {
            color1
        } else {
            color0
        };
        target.add(index).write(value);
    }
}
