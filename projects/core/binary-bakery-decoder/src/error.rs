//! Error types for payload decoding.

use thiserror::Error;

/// Errors that can occur while decoding a baked payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An element count without an explicit element type was requested on a
    /// generic binary payload, which has no implicit element width.
    #[error("Unsupported operation: generic binary payloads need an explicit element type.")]
    UnsupportedOperation,

    /// The input words are shorter than the header or payload they declare.
    #[error("Input too short: need {needed} words, but only {actual} words available.")]
    InputTooShort {
        /// The required length in 64-bit words
        needed: usize,
        /// The actual length in 64-bit words
        actual: usize,
    },

    /// The output element width differs from the payload's bytes per pixel.
    #[error("Element size mismatch: payload has {bpp} bytes per pixel, but element is {element_size} bytes.")]
    ElementSizeMismatch {
        /// Bytes per pixel declared by the header
        bpp: u8,
        /// Size of the requested element type in bytes
        element_size: usize,
    },

    /// Indexed images store at most 4 bytes per replacement colour.
    #[error("Unsupported element size: {0} bytes. Indexed images support 1 to 4 bytes per pixel.")]
    UnsupportedElementSize(usize),

    /// The payload does not contain a single element of the requested type.
    #[error("Payload contains no elements of the requested type.")]
    NoElements,

    /// The capacity of a fixed-size output does not match the payload.
    #[error("Capacity mismatch: payload holds {expected} elements, but output holds {actual}.")]
    CapacityMismatch {
        /// Element count computed from the header
        expected: usize,
        /// Capacity of the fixed-size output
        actual: usize,
    },

    /// The output buffer is too small for the payload.
    #[error("Output buffer too small: need {needed} elements, but only {actual} elements available.")]
    OutputBufferTooSmall {
        /// The required size in elements
        needed: usize,
        /// The actual size in elements
        actual: usize,
    },
}
