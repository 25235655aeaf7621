#![no_main]

// Checks that every delivery strategy produces the same elements, or the same error.

use binary_bakery_decoder::{
    decode_into_ptr, decode_into_slice, decode_to_array, decode_to_vec, DecodeError, Header,
    PayloadType,
};
use bytemuck::Pod;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Payload {
    pub payload_type: u8,
    pub bpp: u8,
    pub bit_count: u16,
    pub width: u8,
    pub height: u8,
    pub color0: u32,
    pub color1: u32,
    pub data: Vec<u8>,
}

impl Payload {
    fn to_words(&self) -> Vec<u64> {
        let header = Header {
            payload_type: PayloadType::from_u8(self.payload_type % 3),
            bpp: self.bpp % 5,
            bit_count: self.bit_count as u32,
            width: self.width as u16,
            height: self.height as u16,
            color0: self.color0,
            color1: self.color1,
        };

        let mut words = header.to_words().to_vec();
        words.extend(self.data.chunks(8).map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            u64::from_ne_bytes(bytes)
        }));
        words
    }
}

fuzz_target!(|payload: Payload| {
    let words = payload.to_words();
    check_strategies::<u8>(&words);
    check_strategies::<[u8; 3]>(&words);
    check_strategies::<u32>(&words);
});

fn check_strategies<T>(words: &[u64])
where
    T: Pod + Default + PartialEq + core::fmt::Debug,
{
    let as_vec = decode_to_vec::<T>(words);

    let mut buffer = vec![T::default(); as_vec.as_ref().map_or(0, Vec::len)];
    let as_slice = decode_into_slice(words, &mut buffer).map(|written| buffer[..written].to_vec());
    assert_eq!(as_vec, as_slice, "vec and slice strategies disagree");

    let mut raw = vec![T::default(); buffer.len()];
    let as_ptr = unsafe { decode_into_ptr(words, raw.as_mut_ptr(), raw.len()) }
        .map(|written| raw[..written].to_vec());
    assert_eq!(as_vec, as_ptr, "vec and pointer strategies disagree");

    let Ok(elements) = &as_vec else {
        return;
    };
    let Ok(header) = binary_bakery_decoder::read_header(words) else {
        return;
    };
    match decode_to_array::<T, 16>(words, &header) {
        Ok(array) => assert_eq!(elements.as_slice(), array.as_slice()),
        Err(DecodeError::CapacityMismatch { actual, .. }) => assert_eq!(actual, elements.len()),
        Err(DecodeError::NoElements) => assert!(elements.is_empty()),
        Err(error) => panic!("fixed strategy failed where others succeeded: {error:?}"),
    }
}
