//! Unsigned variable-length integers (LEB128 / uvarint).
//!
//! Each byte carries 7 bits of the value, least-significant group first. The high bit
//! (`0x80`) is set on every byte except the last, so a forward reader always knows where
//! the value ends. A `u64` needs between 1 and [`MAX_LEN`] bytes.

use crate::error::{Result, TemplateError};

/// Longest encoding of a `u64` (`ceil(64 / 7)`).
pub const MAX_LEN: usize = 10;

/// Number of bytes [`encode`] produces for `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Append the encoding of `value` to `out`.
pub fn write(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Encode `value` into a buffer sized exactly to its encoding.
pub fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    write(&mut out, value);
    out
}

/// Decode a value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate().take(MAX_LEN) {
        let group = u64::from(byte & 0x7f);
        let shift = 7 * i as u32;
        // The tenth byte may only contribute the single remaining bit.
        if i == MAX_LEN - 1 && byte > 1 {
            return Err(TemplateError::MalformedVarint("value overflows 64 bits"));
        }
        value |= group << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    if bytes.len() >= MAX_LEN {
        Err(TemplateError::MalformedVarint("value overflows 64 bits"))
    } else {
        Err(TemplateError::MalformedVarint("unexpected end of input"))
    }
}
