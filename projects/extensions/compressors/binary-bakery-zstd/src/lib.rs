#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use binary_bakery_api::Decompressor;
use core::ffi::c_void;
use thiserror::Error;
use zstd_sys::ZSTD_cParameter::*;
use zstd_sys::*;

// Sentinels returned by `ZSTD_getFrameContentSize`.
const CONTENT_SIZE_UNKNOWN: u64 = u64::MAX;
const CONTENT_SIZE_ERROR: u64 = u64::MAX - 1;

/// Errors that can occur during ZStandard compression and decompression.
#[derive(Debug, Error)]
pub enum ZStandardError {
    /// Invalid compression level
    #[error("Invalid compression level: {0}")]
    InvalidLevel(i32),

    /// The frame does not record its decompressed size
    #[error("ZStandard frame does not record its content size")]
    UnknownContentSize,

    /// The input is not a valid ZStandard frame
    #[error("Input is not a valid ZStandard frame")]
    InvalidFrame,

    /// The decompressed size does not fit into memory on this platform
    #[error("Decompressed size of {0} bytes is too large")]
    ContentTooLarge(u64),

    /// ZStandard internal error
    #[error("ZStandard internal error: {0:?}")]
    ZStandardInternal(ZSTD_ErrorCode),
}

/// ZStandard implementation of [`Decompressor`].
///
/// Expects a single standard ZStandard frame with its content size recorded,
/// as written by [`compress`] or the `zstd` command line tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZStandardDecompressor;

impl Decompressor for ZStandardDecompressor {
    type Error = ZStandardError;

    fn decompressed_size(&self, input: &[u8]) -> Result<usize, Self::Error> {
        let size =
            unsafe { ZSTD_getFrameContentSize(input.as_ptr() as *const c_void, input.len()) };

        match size {
            CONTENT_SIZE_UNKNOWN => Err(ZStandardError::UnknownContentSize),
            CONTENT_SIZE_ERROR => Err(ZStandardError::InvalidFrame),
            size => usize::try_from(size).map_err(|_| ZStandardError::ContentTooLarge(size)),
        }
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Self::Error> {
        let result = unsafe {
            ZSTD_decompress(
                output.as_mut_ptr() as *mut c_void,
                output.len(),
                input.as_ptr() as *const c_void,
                input.len(),
            )
        };

        check(result)
    }
}

/// Compresses data into a single ZStandard frame that records its content size.
///
/// # Parameters
///
/// * `level`: Level at which we are compressing (1-22).
/// * `source`: Source data to compress.
pub fn compress(level: i32, source: &[u8]) -> Result<Vec<u8>, ZStandardError> {
    if !(1..=22).contains(&level) {
        return Err(ZStandardError::InvalidLevel(level));
    }

    let cctx = unsafe { ZSTD_createCCtx() };
    if cctx.is_null() {
        return Err(ZStandardError::ZStandardInternal(
            ZSTD_ErrorCode::ZSTD_error_GENERIC,
        ));
    }

    let mut destination = vec![0u8; unsafe { ZSTD_compressBound(source.len()) }];
    let result = unsafe {
        ZSTD_CCtx_setParameter(cctx, ZSTD_c_compressionLevel, level);
        ZSTD_CCtx_setParameter(cctx, ZSTD_c_contentSizeFlag, 1);
        ZSTD_CCtx_setParameter(cctx, ZSTD_c_checksumFlag, 0);
        ZSTD_CCtx_setParameter(cctx, ZSTD_c_dictIDFlag, 0);

        let result = ZSTD_compress2(
            cctx,
            destination.as_mut_ptr() as *mut c_void,
            destination.len(),
            source.as_ptr() as *const c_void,
            source.len(),
        );
        ZSTD_freeCCtx(cctx);
        result
    };

    let written = check(result)?;
    destination.truncate(written);
    Ok(destination)
}

/// Converts a ZStandard size-or-error return value into a [`Result`].
fn check(result: usize) -> Result<usize, ZStandardError> {
    if unsafe { ZSTD_isError(result) } == 0 {
        return Ok(result);
    }

    Err(ZStandardError::ZStandardInternal(unsafe {
        ZSTD_getErrorCode(result)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn round_trips_data() {
        let data =
            b"Hello, world! This is a test string for compression. test test test test test test!!";
        let compressed = compress(3, data).unwrap();
        assert!(compressed.len() < data.len());

        let size = ZStandardDecompressor.decompressed_size(&compressed).unwrap();
        assert_eq!(size, data.len());

        let mut output = vec![0u8; size];
        let written = ZStandardDecompressor
            .decompress(&compressed, &mut output)
            .unwrap();
        assert_eq!(written, data.len());
        assert_eq!(&output[..], &data[..]);
    }

    #[rstest]
    #[case(0)]
    #[case(23)]
    #[case(-1)]
    fn rejects_invalid_compression_level(#[case] level: i32) {
        let result = compress(level, b"data");
        assert!(matches!(result, Err(ZStandardError::InvalidLevel(l)) if l == level));
    }

    #[test]
    fn rejects_garbage_input() {
        let garbage = [0x12u8, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        let result = ZStandardDecompressor.decompressed_size(&garbage);
        assert!(matches!(result, Err(ZStandardError::InvalidFrame)));
    }

    #[test]
    fn rejects_small_output() {
        let data = [7u8; 256];
        let compressed = compress(3, &data).unwrap();
        let mut output = [0u8; 16];

        let result = ZStandardDecompressor.decompress(&compressed, &mut output);
        assert!(matches!(result, Err(ZStandardError::ZStandardInternal(_))));
    }
}
