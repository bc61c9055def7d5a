//! Base64 encoding and decoding utilities.
//!
//! This crate provides padded standard base64 (RFC 4648) with:
//! - Dual-mode [`encode`] / [`decode`]: measure the output length, or fill a
//!   caller-supplied buffer, through the same code path
//! - Allocating helpers ([`to_base64`], [`from_base64`])
//! - A C ABI in [`ffi`] returning negative sentinels on error
//!
//! # Example
//!
//! ```
//! use base64_codec::{encode, decode, to_base64, from_base64};
//!
//! let data = b"hello world";
//! let mut text = vec![0u8; encode(data, None).unwrap()];
//! encode(data, Some(&mut text[..])).unwrap();
//! assert_eq!(text, to_base64(data).as_bytes());
//!
//! let mut bytes = vec![0u8; decode(&text, None).unwrap()];
//! decode(&text, Some(&mut bytes[..])).unwrap();
//! assert_eq!(bytes, from_base64("aGVsbG8gd29ybGQ=").unwrap());
//! ```

pub mod cli;
mod constants;
mod decode;
mod encode;
pub mod ffi;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, DECODE_TABLE, INVALID, PAD, PAD_BYTE};
pub use decode::{decode, decoded_len};
pub use encode::{encode, encoded_len};
pub use from_base64::{from_base64, from_base64_bin};
pub use to_base64::to_base64;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input pointer was null (C ABI only).
    #[error("input data is null")]
    NullInput,
    /// The base64 input length must be a multiple of 4.
    #[error("base64 length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// The input contains a byte outside the alphabet.
    #[error("invalid base64 symbol 0x{byte:02x} at offset {offset}")]
    InvalidSymbol { offset: usize, byte: u8 },
    /// Padding appears somewhere other than the end of the final group.
    #[error("misplaced base64 padding at offset {offset}")]
    InvalidPadding { offset: usize },
    /// The fill-mode destination is shorter than the output.
    #[error("output buffer holds {available} bytes, {required} required")]
    OutputTooSmall { required: usize, available: usize },
    /// A length does not fit the C ABI return type.
    #[error("length exceeds the representable range")]
    Overflow,
}

impl Base64Error {
    /// Negative sentinel reported for this error across the C ABI.
    pub const fn code(&self) -> i32 {
        match self {
            Base64Error::NullInput => -1,
            Base64Error::InvalidLength { .. } => -2,
            Base64Error::InvalidSymbol { .. } => -3,
            Base64Error::InvalidPadding { .. } => -4,
            Base64Error::Overflow => -5,
            Base64Error::OutputTooSmall { .. } => -6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_negative_and_distinct() {
        let errors = [
            Base64Error::NullInput,
            Base64Error::InvalidLength { length: 1 },
            Base64Error::InvalidSymbol { offset: 0, byte: 0 },
            Base64Error::InvalidPadding { offset: 0 },
            Base64Error::Overflow,
            Base64Error::OutputTooSmall {
                required: 1,
                available: 0,
            },
        ];
        let mut codes: Vec<i32> = errors.iter().map(Base64Error::code).collect();
        assert!(codes.iter().all(|&c| c < 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display() {
        assert_eq!(
            Base64Error::InvalidSymbol {
                offset: 3,
                byte: b'!'
            }
            .to_string(),
            "invalid base64 symbol 0x21 at offset 3"
        );
        assert_eq!(
            Base64Error::InvalidLength { length: 5 }.to_string(),
            "base64 length 5 is not a multiple of 4"
        );
    }
}
