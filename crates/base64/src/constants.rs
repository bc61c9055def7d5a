/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Marks a byte that is not part of the alphabet in [`DECODE_TABLE`].
pub const INVALID: u8 = 0xFF;

/// Reverse lookup table: byte value to 6-bit alphabet index, or [`INVALID`].
///
/// The padding byte maps to [`INVALID`] as well; decoders check for it first.
pub static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};
