//! C ABI for the codec.
//!
//! ```c
//! int base64_encode(const char* data, int data_len, char* encoded);
//! int base64_decode(const char* data, int data_len, char* decoded);
//! ```
//!
//! Both return the output length, or a negative [`Base64Error::code`]. A null
//! output pointer only measures. A null `data` pointer or a negative
//! `data_len` returns `-1`.

use std::ffi::{c_char, c_int};
use std::slice;

use crate::{decode, encode, Base64Error};

/// Borrows the caller's input.
///
/// # Safety
///
/// A non-null `data` must be valid for reads of `data_len` bytes.
unsafe fn input<'a>(data: *const c_char, data_len: c_int) -> Result<&'a [u8], Base64Error> {
    if data.is_null() {
        return Err(Base64Error::NullInput);
    }
    let len = usize::try_from(data_len).map_err(|_| Base64Error::NullInput)?;
    Ok(unsafe { slice::from_raw_parts(data.cast::<u8>(), len) })
}

/// Runs `op` in measure mode, then in fill mode over exactly the measured
/// length when `out` is non-null.
///
/// # Safety
///
/// A non-null `out` must be valid for writes of the measured length and must
/// not overlap `data`.
unsafe fn measure_then_fill(
    data: *const c_char,
    data_len: c_int,
    out: *mut c_char,
    op: fn(&[u8], Option<&mut [u8]>) -> Result<usize, Base64Error>,
) -> Result<c_int, Base64Error> {
    let input = unsafe { input(data, data_len)? };
    let required = op(input, None)?;
    let code = c_int::try_from(required).map_err(|_| Base64Error::Overflow)?;
    if out.is_null() {
        return Ok(code);
    }
    let dest = unsafe { slice::from_raw_parts_mut(out.cast::<u8>(), required) };
    op(input, Some(dest))?;
    Ok(code)
}

fn into_code(result: Result<c_int, Base64Error>) -> c_int {
    result.unwrap_or_else(|e| e.code())
}

/// Encodes `data_len` bytes at `data` into `encoded`.
///
/// # Safety
///
/// `data` must be null or valid for reads of `data_len` bytes. `encoded` must
/// be null or valid for writes of the length this function returns when
/// called with a null `encoded`, and must not overlap `data`.
#[no_mangle]
pub unsafe extern "C" fn base64_encode(
    data: *const c_char,
    data_len: c_int,
    encoded: *mut c_char,
) -> c_int {
    into_code(unsafe { measure_then_fill(data, data_len, encoded, encode) })
}

/// Decodes `data_len` base64 symbols at `data` into `decoded`.
///
/// # Safety
///
/// `data` must be null or valid for reads of `data_len` bytes. `decoded` must
/// be null or valid for writes of the length this function returns when
/// called with a null `decoded`, and must not overlap `data`.
#[no_mangle]
pub unsafe extern "C" fn base64_decode(
    data: *const c_char,
    data_len: c_int,
    decoded: *mut c_char,
) -> c_int {
    into_code(unsafe { measure_then_fill(data, data_len, decoded, decode) })
}
