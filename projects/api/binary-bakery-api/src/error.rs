//! Error types for decoding compressed payloads.

use binary_bakery_decoder::DecodeError;
use thiserror::Error;

/// Errors that can occur while decompressing and decoding a payload.
#[derive(Debug, Error)]
pub enum BakeryError<E = alloc::string::String>
where
    E: core::fmt::Debug,
{
    /// The decompressed payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decompressor reported an error.
    #[error("Decompression failed: {0:?}")]
    DecompressionFailed(E),

    /// The decompressor wrote a different number of bytes than it announced.
    #[error("Decompressed size mismatch: expected {expected} bytes, got {actual} bytes.")]
    SizeMismatch {
        /// Size announced by [`crate::Decompressor::decompressed_size`]
        expected: usize,
        /// Bytes written by [`crate::Decompressor::decompress`]
        actual: usize,
    },
}
