//! Standard base64 encoding to an owned string.

use crate::encode::encode;

/// Encodes a byte slice to a standard base64 string.
///
/// The destination is measured first and allocated once at its exact size.
///
/// # Example
///
/// ```
/// use base64_codec::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut out = vec![0u8; crate::encoded_len(uint8.len())];
    // The buffer is sized by the length law, so fill mode cannot run short.
    let len = encode(uint8, Some(&mut out[..])).unwrap_or_default();
    out.truncate(len);
    // Every byte written comes from the ASCII alphabet or the padding symbol.
    out.into_iter().map(char::from).collect()
}
