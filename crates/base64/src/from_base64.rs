//! Standard base64 decoding to an owned buffer.

use crate::decode::decode;
use crate::Base64Error;

/// Decodes a standard base64 string.
///
/// # Errors
///
/// Any [`Base64Error`] reported while decoding the input.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    from_base64_bin(encoded.as_bytes())
}

/// Decodes standard base64 held in a byte slice.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64_bin;
///
/// assert_eq!(from_base64_bin(b"TWFu").unwrap(), b"Man");
/// ```
pub fn from_base64_bin(view: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut buf = vec![0u8; decode(view, None)?];
    let len = decode(view, Some(&mut buf[..]))?;
    buf.truncate(len);
    Ok(buf)
}
