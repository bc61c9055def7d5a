//! Dual-mode base64 decoding.

use tracing::trace;

use crate::constants::{DECODE_TABLE, INVALID, PAD_BYTE};
use crate::Base64Error;

/// Number of `=` symbols closing `text`, looking at the last two bytes only.
fn trailing_padding(text: &[u8]) -> usize {
    text.iter()
        .rev()
        .take(2)
        .take_while(|&&b| b == PAD_BYTE)
        .count()
}

fn invalid_padding(offset: usize) -> Base64Error {
    trace!(offset, "misplaced base64 padding");
    Base64Error::InvalidPadding { offset }
}

/// Resolves one symbol to its 6-bit value.
#[inline]
fn sextet(byte: u8, offset: usize) -> Result<u8, Base64Error> {
    match DECODE_TABLE[byte as usize] {
        INVALID => {
            trace!(offset, byte, "invalid base64 symbol");
            Err(Base64Error::InvalidSymbol { offset, byte })
        }
        value => Ok(value),
    }
}

/// Decodes padded standard base64 `text`.
///
/// With `output` set to `None` the input is fully validated and the decoded
/// length is returned (measure mode). With a buffer the decoded bytes are
/// written to its first `len` bytes and the same `len` is returned (fill mode).
///
/// Padding is accepted only as `x=` or `==` closing the final group.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if `text.len()` is not a multiple of 4.
/// - [`Base64Error::InvalidSymbol`] for a byte outside the alphabet.
/// - [`Base64Error::InvalidPadding`] for `=` anywhere else than the end.
/// - [`Base64Error::OutputTooSmall`] if the fill-mode buffer is too short.
///
/// On error the content of the buffer is unspecified.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// let len = decode(b"TWE=", None).unwrap();
/// let mut buf = vec![0u8; len];
/// assert_eq!(decode(b"TWE=", Some(&mut buf[..])).unwrap(), 2);
/// assert_eq!(buf, b"Ma");
/// ```
pub fn decode(text: &[u8], mut output: Option<&mut [u8]>) -> Result<usize, Base64Error> {
    let length = text.len();
    if !length.is_multiple_of(4) {
        trace!(length, "base64 input is not padded to a 4-symbol boundary");
        return Err(Base64Error::InvalidLength { length });
    }

    if let Some(dest) = output.as_deref() {
        let required = length / 4 * 3 - trailing_padding(text);
        if dest.len() < required {
            return Err(Base64Error::OutputTooSmall {
                required,
                available: dest.len(),
            });
        }
    }

    let last_group = (length / 4).saturating_sub(1);
    let mut written = 0;

    for (group, quad) in text.chunks_exact(4).enumerate() {
        let offset = group * 4;
        let mut sextets = [0u8; 4];
        let mut padding = 0;

        for (j, &byte) in quad.iter().enumerate() {
            if byte == PAD_BYTE {
                if group != last_group || j < 2 {
                    return Err(invalid_padding(offset + j));
                }
                padding += 1;
            } else if padding > 0 {
                return Err(invalid_padding(offset + j));
            } else {
                sextets[j] = sextet(byte, offset + j)?;
            }
        }

        let [c0, c1, c2, c3] = sextets;
        let bytes = [
            (c0 << 2) | ((c1 & 0x30) >> 4),
            ((c1 & 0xF) << 4) | ((c2 & 0x3C) >> 2),
            ((c2 & 0x3) << 6) | c3,
        ];
        let n = 3 - padding;
        if let Some(dest) = output.as_deref_mut() {
            dest[written..written + n].copy_from_slice(&bytes[..n]);
        }
        written += n;
    }

    Ok(written)
}

/// Returns the decoded length of `text`, validating it in full.
///
/// Shorthand for `decode(text, None)`.
pub fn decoded_len(text: &[u8]) -> Result<usize, Base64Error> {
    decode(text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(text: &[u8]) -> Result<Vec<u8>, Base64Error> {
        let mut buf = vec![0u8; decoded_len(text)?];
        let len = decode(text, Some(&mut buf[..]))?;
        buf.truncate(len);
        Ok(buf)
    }

    #[test]
    fn test_vectors() {
        assert_eq!(fill(b"").unwrap(), b"");
        assert_eq!(fill(b"TWFu").unwrap(), b"Man");
        assert_eq!(fill(b"TQ==").unwrap(), b"M");
        assert_eq!(fill(b"TWE=").unwrap(), b"Ma");
        assert_eq!(fill(b"TWFuTQ==").unwrap(), b"ManM");
    }

    #[test]
    fn test_trailing_padding() {
        assert_eq!(trailing_padding(b""), 0);
        assert_eq!(trailing_padding(b"TWFu"), 0);
        assert_eq!(trailing_padding(b"TWE="), 1);
        assert_eq!(trailing_padding(b"TQ=="), 2);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            decode(b"TWF", None),
            Err(Base64Error::InvalidLength { length: 3 })
        );
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            decode(b"TW-u", None),
            Err(Base64Error::InvalidSymbol {
                offset: 2,
                byte: b'-'
            })
        );
        assert_eq!(
            decode(b"TWFu\x80AAA", None),
            Err(Base64Error::InvalidSymbol {
                offset: 4,
                byte: 0x80
            })
        );
    }

    #[test]
    fn test_misplaced_padding() {
        assert_eq!(
            decode(b"TQ==TWFu", None),
            Err(Base64Error::InvalidPadding { offset: 2 })
        );
        assert_eq!(
            decode(b"T===", None),
            Err(Base64Error::InvalidPadding { offset: 1 })
        );
        assert_eq!(
            decode(b"====", None),
            Err(Base64Error::InvalidPadding { offset: 0 })
        );
        assert_eq!(
            decode(b"TW=u", None),
            Err(Base64Error::InvalidPadding { offset: 3 })
        );
    }

    #[test]
    fn test_partial_group_advances_cursor_by_written_bytes() {
        let mut buf = [0xAAu8; 5];
        let len = decode(b"TWFuTWE=", Some(&mut buf[..])).unwrap();
        assert_eq!(len, 5);
        assert_eq!(&buf, b"ManMa");
    }

    #[test]
    fn test_short_buffer() {
        let mut buf = [0u8; 1];
        assert_eq!(
            decode(b"TWE=", Some(&mut buf[..])),
            Err(Base64Error::OutputTooSmall {
                required: 2,
                available: 1
            })
        );
    }
}
