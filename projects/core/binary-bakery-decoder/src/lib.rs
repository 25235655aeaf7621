#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod color;
pub mod decode;
pub mod element_count;
pub mod error;
pub mod header;
pub mod reconstruct;

pub use color::{element_color_pair, sized_color_pair, ColorPair, SizedColor};
pub use decode::{
    decode_into_ptr, decode_into_slice, decode_to_array, decode_to_vec, FixedPayload,
};
pub use element_count::{
    element_count, element_count_of, pixel_count, pixel_count_of, required_word_count,
};
pub use error::DecodeError;
pub use header::{
    height, is_image, read_header, read_header_unchecked, width, write_header, Header,
    PayloadType, HEADER_SIZE, HEADER_WORDS,
};
pub use reconstruct::{reconstruct, reconstruct_unchecked};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
