//! Dual-mode base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::Base64Error;

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i * 64 + j` holds the symbols for the sextets `i` and `j`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Returns the encoded length of `length` input bytes: `4 * ceil(length / 3)`.
///
/// # Example
///
/// ```
/// use base64_codec::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes `data` as padded standard base64.
///
/// With `output` set to `None` only the required length is returned (measure
/// mode). With a buffer the symbols are written to its first `len` bytes and
/// the same `len` is returned (fill mode).
///
/// # Errors
///
/// Returns [`Base64Error::OutputTooSmall`] when the buffer given in fill mode
/// is shorter than the encoded length. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// let len = encode(b"Man", None).unwrap();
/// let mut buf = vec![0u8; len];
/// assert_eq!(encode(b"Man", Some(&mut buf[..])).unwrap(), len);
/// assert_eq!(buf, b"TWFu");
/// ```
pub fn encode(data: &[u8], output: Option<&mut [u8]>) -> Result<usize, Base64Error> {
    let required = encoded_len(data.len());
    let Some(dest) = output else {
        return Ok(required);
    };
    if dest.len() < required {
        return Err(Base64Error::OutputTooSmall {
            required,
            available: dest.len(),
        });
    }

    let extra_length = data.len() % 3;
    let base_length = data.len() - extra_length;

    for (group, out) in data[..base_length]
        .chunks_exact(3)
        .zip(dest.chunks_exact_mut(4))
    {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
        out[..2].copy_from_slice(&TABLE2[v1]);
        out[2..4].copy_from_slice(&TABLE2[v2]);
    }

    let offset = base_length / 3 * 4;
    match extra_length {
        1 => {
            let o1 = data[base_length];
            dest[offset..offset + 2].copy_from_slice(&TABLE2[(o1 as usize) << 4]);
            dest[offset + 2] = PAD_BYTE;
            dest[offset + 3] = PAD_BYTE;
        }
        2 => {
            let o1 = data[base_length];
            let o2 = data[base_length + 1];
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2] = ALPHABET_BYTES[v2];
            dest[offset + 3] = PAD_BYTE;
        }
        _ => {}
    }

    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(data: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; encoded_len(data.len())];
        let len = encode(data, Some(&mut buf[..])).unwrap();
        buf.truncate(len);
        buf
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", None).unwrap(), 0);
        assert_eq!(fill(b""), b"");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(fill(b"M"), b"TQ==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(fill(b"Ma"), b"TWE=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(fill(b"Man"), b"TWFu");
    }

    #[test]
    fn test_high_bits() {
        assert_eq!(fill(&[0xFF, 0xFF, 0xFF]), b"////");
        assert_eq!(fill(&[0xFB, 0xEF]), b"++8=");
        assert_eq!(fill(&[0x00]), b"AA==");
    }

    #[test]
    fn test_larger_buffer_is_left_alone_past_len() {
        let mut buf = vec![b'#'; 10];
        let len = encode(b"Ma", Some(&mut buf[..])).unwrap();
        assert_eq!(len, 4);
        assert_eq!(&buf, b"TWE=######");
    }

    #[test]
    fn test_short_buffer() {
        let mut buf = [0u8; 3];
        assert_eq!(
            encode(b"Man", Some(&mut buf[..])),
            Err(Base64Error::OutputTooSmall {
                required: 4,
                available: 3
            })
        );
        assert_eq!(buf, [0u8; 3]);
    }
}
