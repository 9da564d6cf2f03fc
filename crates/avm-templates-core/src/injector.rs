//! Placeholder injection into precompiled programs.
//!
//! A template program is compiled once with sentinel bytes at known offsets. Instantiating
//! it means replacing each sentinel region with a real value. Integer values are written as
//! uvarints, so a 1-byte sentinel may become up to 10 bytes and push everything after it
//! to the right. Placeholders are therefore given in ascending order of their offset in the
//! *original* program and processed in a single forward pass that carries the cumulative
//! shift to every later placeholder.
//!
//! ```text
//! original:  01 20 04 [08] 01 00 [09] 26 ...      placeholders @3/1, @6/1
//! values:    Uint(1000) -> e8 07 (+1)   Uint(600000) -> c0 cf 24 (+2)
//! result:    01 20 04 [e8 07] 01 00 [c0 cf 24] 26 ...
//!                                     ^ 6 + 1 = 7
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::address::{Address, PUBLIC_KEY_LEN};
use crate::error::{Result, TemplateError};
use crate::varint;

/// A region of the original program reserved for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte offset in the original program.
    pub offset: usize,
    /// Number of original bytes the substitution replaces.
    pub width: usize,
}

impl Placeholder {
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }

    /// An integer placeholder: a single sentinel byte.
    pub const fn uint(offset: usize) -> Self {
        Self::new(offset, 1)
    }

    /// A 32-byte placeholder (address, hash image, lease).
    pub const fn bytes32(offset: usize) -> Self {
        Self::new(offset, PUBLIC_KEY_LEN)
    }
}

/// A value to write into a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateValue {
    /// Written as a uvarint, 1 to 10 bytes.
    Uint(u64),
    /// Written verbatim.
    Bytes32([u8; 32]),
}

impl TemplateValue {
    /// Decode an address string into its 32-byte public key.
    pub fn address(encoded: &str) -> Result<Self> {
        Ok(Self::from(Address::decode(encoded)?))
    }

    /// Decode a standard-base64 string that must hold exactly 32 bytes.
    pub fn base64_bytes32(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| TemplateError::InvalidBytes32(format!("{encoded}: {e}")))?;
        let array: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            TemplateError::InvalidBytes32(format!("{encoded}: expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::Bytes32(array))
    }

    /// Length of the encoded value in bytes.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Uint(v) => varint::encoded_len(*v),
            Self::Bytes32(b) => b.len(),
        }
    }

    /// The bytes written into the program.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Uint(v) => varint::encode(*v),
            Self::Bytes32(b) => b.to_vec(),
        }
    }
}

impl From<u64> for TemplateValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<Address> for TemplateValue {
    fn from(address: Address) -> Self {
        Self::Bytes32(address.to_bytes())
    }
}

/// Replace every placeholder in `original` with the matching value.
///
/// `placeholders[i]` receives `values[i]`. Placeholders must be sorted by original offset
/// and must not overlap. The original buffer is never modified; on error no partial result
/// is returned.
pub fn inject(
    original: &[u8],
    placeholders: &[Placeholder],
    values: &[TemplateValue],
) -> Result<Vec<u8>> {
    if placeholders.len() != values.len() {
        return Err(TemplateError::ArityMismatch {
            placeholders: placeholders.len(),
            values: values.len(),
        });
    }
    check_order(placeholders)?;

    let grown: usize = values.iter().map(TemplateValue::encoded_len).sum();
    let mut result = Vec::with_capacity(original.len() + grown);
    result.extend_from_slice(original);

    // Net growth from substitutions already applied. Only placeholders not yet consumed
    // read it, and each substitution adds its delta exactly once.
    let mut shift: isize = 0;

    for (index, (placeholder, value)) in placeholders.iter().zip(values).enumerate() {
        let out_of_range = |offset: usize| TemplateError::OffsetOutOfRange {
            index,
            offset,
            width: placeholder.width,
            len: result.len(),
        };

        let offset = placeholder
            .offset
            .checked_add_signed(shift)
            .ok_or_else(|| out_of_range(placeholder.offset))?;
        let end = offset
            .checked_add(placeholder.width)
            .filter(|&end| end <= result.len())
            .ok_or_else(|| out_of_range(offset))?;

        let encoded = value.encode();
        let delta = encoded.len() as isize - placeholder.width as isize;
        tracing::debug!(
            index,
            offset,
            width = placeholder.width,
            encoded_len = encoded.len(),
            delta,
            "substituting placeholder"
        );

        result.splice(offset..end, encoded);
        shift += delta;
    }

    Ok(result)
}

/// Ensure placeholders are ascending and non-overlapping in the original buffer.
fn check_order(placeholders: &[Placeholder]) -> Result<()> {
    let mut previous_end = 0usize;
    for (index, placeholder) in placeholders.iter().enumerate() {
        if index > 0 && placeholder.offset < previous_end {
            return Err(TemplateError::PlaceholderOrder {
                index,
                offset: placeholder.offset,
                previous_end,
            });
        }
        previous_end = placeholder.offset.saturating_add(placeholder.width);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(fill: u8) -> [u8; 32] {
        [fill; 32]
    }

    #[test]
    fn test_single_byte_uint_keeps_length() {
        let original = [0xaa, 0x00, 0xbb];
        let out = inject(&original, &[Placeholder::uint(1)], &[TemplateValue::Uint(5)]).unwrap();
        assert_eq!(out, vec![0xaa, 0x05, 0xbb]);
    }

    #[test]
    fn test_multi_byte_uint_shifts_later_placeholders_once() {
        // @1: 1000 -> e8 07 (+1), @3: 600000 -> c0 cf 24 (+2), @5: 7
        let original = [0x10, 0x00, 0x11, 0x00, 0x12, 0x00, 0x13];
        let placeholders = [Placeholder::uint(1), Placeholder::uint(3), Placeholder::uint(5)];
        let values = [
            TemplateValue::Uint(1_000),
            TemplateValue::Uint(600_000),
            TemplateValue::Uint(7),
        ];
        let out = inject(&original, &placeholders, &values).unwrap();
        assert_eq!(
            out,
            vec![0x10, 0xe8, 0x07, 0x11, 0xc0, 0xcf, 0x24, 0x12, 0x07, 0x13]
        );
    }

    #[test]
    fn test_mixed_kinds_land_at_expected_offsets() {
        let mut original = vec![0x01, 0x00, 0x02];
        original.extend_from_slice(&[0u8; 32]);
        original.push(0x03);
        original.push(0x00);
        original.extend_from_slice(&[0u8; 32]);
        original.push(0x04);

        let placeholders = [
            Placeholder::uint(1),
            Placeholder::bytes32(3),
            Placeholder::uint(36),
            Placeholder::bytes32(37),
        ];
        let values = [
            TemplateValue::Uint(16_384), // 3 bytes, +2
            TemplateValue::Bytes32(key(0xab)),
            TemplateValue::Uint(128), // 2 bytes, +1
            TemplateValue::Bytes32(key(0xcd)),
        ];
        let out = inject(&original, &placeholders, &values).unwrap();

        assert_eq!(out.len(), original.len() + 3);
        assert_eq!(&out[..5], &[0x01, 0x80, 0x80, 0x01, 0x02]);
        assert_eq!(&out[5..37], &key(0xab));
        assert_eq!(out[37], 0x03);
        assert_eq!(&out[38..40], &[0x80, 0x01]);
        assert_eq!(&out[40..72], &key(0xcd));
        assert_eq!(out[72], 0x04);
    }

    #[test]
    fn test_bytes32_never_changes_length() {
        let original = vec![0x55u8; 70];
        let placeholders = [Placeholder::bytes32(0), Placeholder::bytes32(35)];
        let values = [TemplateValue::Bytes32(key(1)), TemplateValue::Bytes32(key(2))];
        let out = inject(&original, &placeholders, &values).unwrap();
        assert_eq!(out.len(), original.len());
        assert_eq!(&out[32..35], &[0x55, 0x55, 0x55]);
    }

    #[test]
    fn test_shrinking_substitution_shifts_left() {
        // a 4-byte integer slot filled with a 1-byte value
        let original = [0xf0, 0, 0, 0, 0, 0xf1, 0x00];
        let placeholders = [Placeholder::new(1, 4), Placeholder::uint(6)];
        let values = [TemplateValue::Uint(9), TemplateValue::Uint(3)];
        let out = inject(&original, &placeholders, &values).unwrap();
        assert_eq!(out, vec![0xf0, 0x09, 0xf1, 0x03]);
    }

    #[test]
    fn test_empty_lists_return_copy() {
        let original = [1, 2, 3];
        assert_eq!(inject(&original, &[], &[]).unwrap(), original.to_vec());
    }

    #[test]
    fn test_address_value_decodes_public_key() {
        let value =
            TemplateValue::address("42NJMHTPFVPXVSDGA6JGKUV6TARV5UZTMPFIREMLXHETRKIVW34QFSDFRE")
                .unwrap();
        let TemplateValue::Bytes32(bytes) = value else {
            panic!("expected Bytes32");
        };
        assert_eq!(bytes[..3], [0xe6, 0x9a, 0x96]);
    }

    #[test]
    fn test_base64_bytes32() {
        let value =
            TemplateValue::base64_bytes32("f4OxZX/x/FO5LcGBSKHWXfwtSx+j1ncoSt3SABJtkGk=").unwrap();
        assert_eq!(value.encoded_len(), 32);
    }

    // --- Error cases ---

    #[test]
    fn test_arity_mismatch() {
        let err = inject(&[0, 0], &[Placeholder::uint(0)], &[]).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::ArityMismatch {
                placeholders: 1,
                values: 0
            }
        ));
    }

    #[test]
    fn test_offset_out_of_range() {
        let err = inject(&[0; 10], &[Placeholder::bytes32(0)], &[TemplateValue::Bytes32(key(0))])
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::OffsetOutOfRange {
                index: 0,
                offset: 0,
                width: 32,
                len: 10
            }
        ));
    }

    #[test]
    fn test_offset_out_of_range_after_shift() {
        // 128 grows the buffer by one byte, but the second slot still overruns
        let original = [0x00, 0x00, 0x00];
        let placeholders = [Placeholder::uint(0), Placeholder::new(1, 3)];
        let values = [TemplateValue::Uint(128), TemplateValue::Uint(1)];
        let err = inject(&original, &placeholders, &values).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::OffsetOutOfRange {
                index: 1,
                offset: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_unsorted_placeholders_rejected() {
        let placeholders = [Placeholder::uint(5), Placeholder::uint(2)];
        let values = [TemplateValue::Uint(1), TemplateValue::Uint(2)];
        let err = inject(&[0; 8], &placeholders, &values).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::PlaceholderOrder {
                index: 1,
                offset: 2,
                previous_end: 6
            }
        ));
    }

    #[test]
    fn test_overlapping_placeholders_rejected() {
        let placeholders = [Placeholder::bytes32(0), Placeholder::uint(31)];
        let values = [TemplateValue::Bytes32(key(0)), TemplateValue::Uint(1)];
        assert!(inject(&[0; 40], &placeholders, &values).is_err());
    }

    #[test]
    fn test_invalid_base64_bytes32() {
        assert!(TemplateValue::base64_bytes32("not base64!").is_err());
        // valid base64, 3 bytes
        assert!(matches!(
            TemplateValue::base64_bytes32("AAAA"),
            Err(TemplateError::InvalidBytes32(_))
        ));
    }
}
