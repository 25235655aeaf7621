//! The decompression step that runs before decoding.
//!
//! Payloads are usually stored compressed. The decoder never decompresses by
//! itself; instead, a [`Decompressor`] turns the stored bytes back into the
//! raw words the decoder consumes.

use alloc::boxed::Box;

/// Trait for decompressing stored payloads.
///
/// The decompressor is an instance rather than a bare function so that
/// implementations can keep their own configuration (dictionaries, formats).
pub trait Decompressor {
    /// The error type returned by decompression operations.
    type Error: core::fmt::Debug;

    /// Returns the exact size of the decompressed data in bytes.
    ///
    /// # Parameters
    /// * `input` - The compressed data
    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error>;

    /// Decompresses `input` into `output`.
    ///
    /// # Parameters
    /// * `input` - The compressed data
    /// * `output` - Buffer of exactly [`Decompressor::decompressed_size`] bytes
    ///
    /// # Returns
    /// The number of bytes written to `output`
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Blanket implementation of [`Decompressor`] for any boxed variant of it.
impl<T: Decompressor + ?Sized> Decompressor for Box<T> {
    type Error = T::Error;

    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error> {
        (**self).decompressed_size(input)
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).decompress(input, output)
    }
}

/// Blanket implementation of [`Decompressor`] for references to it.
impl<T: Decompressor + ?Sized> Decompressor for &T {
    type Error = T::Error;

    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error> {
        (**self).decompressed_size(input)
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).decompress(input, output)
    }
}

/// Decompressor for payloads that were stored without compression.
///
/// Copies the input as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompression;

impl Decompressor for NoCompression {
    type Error = ();

    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error> {
        Ok(input.len())
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Self::Error> {
        let destination = output.get_mut(..input.len()).ok_or(())?;
        destination.copy_from_slice(input);
        Ok(input.len())
    }
}
