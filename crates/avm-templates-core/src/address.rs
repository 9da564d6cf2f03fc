//! Account addresses and program-address derivation.
//!
//! An address is a 32-byte ed25519 public key. Its textual form is the RFC 4648 base32
//! encoding (no padding) of `public_key || checksum`, where the checksum is the last four
//! bytes of `SHA-512/256(public_key)`. That gives 36 bytes and exactly 58 characters.
//!
//! A logic-signature program has an address too: `SHA-512/256("Program" || program)`.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha512_256};

use crate::error::{Result, TemplateError};

/// Length of the raw public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of the textual address.
pub const ENCODED_LEN: usize = 58;

const CHECKSUM_LEN: usize = 4;
const PROGRAM_PREFIX: &[u8] = b"Program";
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// A 32-byte account or program address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; PUBLIC_KEY_LEN]);

impl Address {
    pub const fn new(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero address.
    pub const fn zero() -> Self {
        Self([0u8; PUBLIC_KEY_LEN])
    }

    /// Address of a compiled logic-signature program.
    pub fn from_program(program: &[u8]) -> Self {
        let mut hasher = Sha512_256::new();
        hasher.update(PROGRAM_PREFIX);
        hasher.update(program);
        Self(hasher.finalize().into())
    }

    /// Decode a 58-character address string, verifying its checksum.
    pub fn decode(encoded: &str) -> Result<Self> {
        let invalid = |reason: &str| TemplateError::InvalidAddress {
            address: encoded.to_string(),
            reason: reason.to_string(),
        };

        if encoded.len() != ENCODED_LEN {
            return Err(invalid(&format!(
                "expected {ENCODED_LEN} characters, got {}",
                encoded.len()
            )));
        }

        let raw = base32_decode(encoded).ok_or_else(|| invalid("not valid base32"))?;
        if raw.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
            return Err(invalid("wrong decoded length"));
        }

        let (key, checksum) = raw.split_at(PUBLIC_KEY_LEN);
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(key);
        if checksum != checksum_of(&bytes) {
            return Err(invalid("checksum mismatch"));
        }

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_LEN] {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
        raw.extend_from_slice(&self.0);
        raw.extend_from_slice(&checksum_of(&self.0));
        f.write_str(&base32_encode(&raw))
    }
}

impl FromStr for Address {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<[u8; PUBLIC_KEY_LEN]> for Address {
    fn from(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

fn checksum_of(key: &[u8; PUBLIC_KEY_LEN]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha512_256::digest(key);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

/// Decode unpadded base32. Trailing bits that do not form a whole byte must be zero.
fn base32_decode(encoded: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for c in encoded.bytes() {
        let value = ALPHABET.iter().position(|&a| a == c)? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
        buffer &= (1 << bits) - 1;
    }
    (buffer == 0).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "726KBOYUJJNE5J5UHCSGQGWIBZWKCBN4WYD7YVSTEXEVNFPWUIJ7TAEOPM";
    const RECEIVER: &str = "42NJMHTPFVPXVSDGA6JGKUV6TARV5UZTMPFIREMLXHETRKIVW34QFSDFRE";

    #[test]
    fn test_decode_known_address() {
        let addr = Address::decode(RECEIVER).unwrap();
        assert_eq!(
            hex::encode(addr.as_bytes()),
            "e69a961e6f2d5f7ac86607926552be98235ed33363ca88918bb9c938a915b6f9"
        );
    }

    #[test]
    fn test_display_reencodes() {
        let addr: Address = OWNER.parse().unwrap();
        assert_eq!(addr.to_string(), OWNER);
    }

    #[test]
    fn test_zero_address() {
        assert_eq!(
            Address::zero().to_string(),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ"
        );
    }

    #[test]
    fn test_from_program_is_prefixed_hash() {
        let a = Address::from_program(&[0x01, 0x20, 0x01, 0x01, 0x22]);
        let b = Address::from_program(&[0x01, 0x20, 0x01, 0x01, 0x23]);
        assert_ne!(a, b);
        assert_ne!(a, Address::new(Sha512_256::digest([0x01, 0x20, 0x01, 0x01, 0x22]).into()));
    }

    // --- Edge case tests ---

    #[test]
    fn test_decode_wrong_length() {
        let err = Address::decode("ABC").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidAddress { .. }));
    }

    #[test]
    fn test_decode_bad_checksum() {
        // last character changed
        let tampered = format!("{}A", &OWNER[..ENCODED_LEN - 1]);
        let err = Address::decode(&tampered).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_decode_lowercase_rejected() {
        assert!(Address::decode(&OWNER.to_lowercase()).is_err());
    }

    #[test]
    fn test_decode_non_alphabet() {
        let bad = format!("1{}", &OWNER[1..]);
        assert!(Address::decode(&bad).is_err());
    }
}
