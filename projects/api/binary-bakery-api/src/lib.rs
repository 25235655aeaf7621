#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod decode;
pub mod decompress;
pub mod error;

pub use decode::{
    decode_compressed_into_slice, decode_compressed_to_vec, decompress_to_words,
    read_compressed_header,
};
pub use decompress::{Decompressor, NoCompression};
pub use error::BakeryError;

// Re-export the decoder so users only need one dependency.
pub use binary_bakery_decoder as decoder;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
